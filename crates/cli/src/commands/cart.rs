//! Drive a cart session from a script or from stdin.

use std::fmt::Write as _;
use std::path::Path;

use serde::Serialize;
use sushi_shop_core::{CurrencyCode, Price, ProductId};
use sushi_shop_storefront::cart::{CartCommand, CartState, CartStore, selectors};
use sushi_shop_storefront::{AppError, AppState};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::JoinHandle;
use tracing::{info, warn};

const SHELL_HELP: &str = "\
commands:
  add <product-id>        add one unit of a menu product
  remove <product-id>     remove a line
  qty <product-id> <n>    set a line's quantity (values below 1 become 1)
  clear                   empty the cart
  toggle                  toggle the cart panel
  open <true|false>       show or hide the cart panel
  loading <true|false>    set the loading flag
  show                    print the cart
  help                    print this help
  quit                    leave the shell";

/// A parsed shell line.
#[derive(Debug, PartialEq, Eq)]
pub enum ShellAction {
    Dispatch(CartCommand),
    Show,
    Help,
    Quit,
}

/// Printable view of a cart.
#[derive(Debug, Serialize)]
pub struct CartSummary {
    pub session: String,
    pub items: Vec<CartLineSummary>,
    pub item_count: u64,
    pub subtotal: Price,
    pub is_open: bool,
    pub is_loading: bool,
}

#[derive(Debug, Serialize)]
pub struct CartLineSummary {
    pub id: ProductId,
    pub name: String,
    pub unit_price: Price,
    pub quantity: u32,
    pub line_total: Price,
}

impl CartSummary {
    #[must_use]
    pub fn new(session: String, state: &CartState, currency: CurrencyCode) -> Self {
        Self {
            session,
            items: state
                .items()
                .map(|line| CartLineSummary {
                    id: line.id().clone(),
                    name: line.name().to_string(),
                    unit_price: line.unit_price(),
                    quantity: line.quantity().get(),
                    line_total: line.line_total(),
                })
                .collect(),
            item_count: selectors::item_count(state),
            subtotal: selectors::subtotal_in(state, currency),
            is_open: state.is_open(),
            is_loading: state.is_loading(),
        }
    }

    /// Human-readable table.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        if self.items.is_empty() {
            out.push_str("(cart is empty)\n");
        }
        for line in &self.items {
            let _ = writeln!(
                out,
                "{:>3}  {:<20} {:>4} x {:>8} = {:>9}",
                line.id.as_str(),
                line.name,
                line.quantity,
                line.unit_price.to_string(),
                line.line_total.to_string()
            );
        }
        let _ = writeln!(
            out,
            "items: {}  subtotal: {}  panel: {}{}",
            self.item_count,
            self.subtotal,
            if self.is_open { "open" } else { "closed" },
            if self.is_loading { "  (loading)" } else { "" }
        );
        out
    }
}

/// Replay a YAML command script against a fresh cart and print the result.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a list of commands.
pub async fn replay(
    state: &AppState,
    path: &Path,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    info!(path = %path.display(), "Loading cart script");
    let content = tokio::fs::read_to_string(path).await?;
    let commands: Vec<CartCommand> = serde_yaml::from_str(&content)?;
    info!(commands = commands.len(), "Parsed cart script");

    let cart = state.open_cart();
    let watcher = spawn_change_logger(&cart);

    for command in commands {
        cart.dispatch(command);
    }

    let summary = summarize(state, &cart);
    drop(cart);
    watcher.await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", summary.render());
    }
    Ok(())
}

/// Read shell lines from stdin until EOF or `quit`.
///
/// Bad lines are reported and skipped; they never end the session.
///
/// # Errors
///
/// Returns an error if stdin cannot be read.
pub async fn shell(state: &AppState) -> Result<(), Box<dyn std::error::Error>> {
    let cart = state.open_cart();
    let watcher = spawn_change_logger(&cart);

    println!("{SHELL_HELP}");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(state, &line) {
            Ok(ShellAction::Dispatch(command)) => {
                cart.dispatch(command);
            }
            Ok(ShellAction::Show) => print!("{}", summarize(state, &cart).render()),
            Ok(ShellAction::Help) => println!("{SHELL_HELP}"),
            Ok(ShellAction::Quit) => break,
            Err(e) => {
                warn!(input = %line, "{e}");
                println!("error: {e}");
            }
        }
    }

    print!("{}", summarize(state, &cart).render());
    drop(cart);
    watcher.await?;
    Ok(())
}

/// Parse one shell line. Product lookups go through the catalog.
///
/// # Errors
///
/// Returns `AppError::InvalidCommand` for malformed input and
/// `AppError::Catalog` when `add` names an unknown product.
pub fn parse_line(state: &AppState, line: &str) -> Result<ShellAction, AppError> {
    let mut words = line.split_whitespace();
    let verb = words.next().unwrap_or_default().to_ascii_lowercase();
    let args: Vec<&str> = words.collect();

    let action = match (verb.as_str(), args.as_slice()) {
        ("add", [id]) => {
            let product = state.catalog().require(&ProductId::new(*id))?;
            ShellAction::Dispatch(product.to_line_item().into())
        }
        ("remove", [id]) => ShellAction::Dispatch(CartCommand::RemoveItem {
            id: ProductId::new(*id),
        }),
        ("qty", [id, quantity]) => {
            let quantity = quantity.parse::<i64>().map_err(|_| {
                AppError::InvalidCommand(format!("quantity must be an integer (got '{quantity}')"))
            })?;
            ShellAction::Dispatch(CartCommand::SetQuantity {
                id: ProductId::new(*id),
                quantity,
            })
        }
        ("clear", []) => ShellAction::Dispatch(CartCommand::ClearCart),
        ("toggle", []) => ShellAction::Dispatch(CartCommand::ToggleOpen),
        ("open", [value]) => ShellAction::Dispatch(CartCommand::SetOpen {
            value: parse_bool(value)?,
        }),
        ("loading", [value]) => ShellAction::Dispatch(CartCommand::SetLoading {
            value: parse_bool(value)?,
        }),
        ("show", []) => ShellAction::Show,
        ("help", []) => ShellAction::Help,
        ("quit" | "exit", []) => ShellAction::Quit,
        _ => {
            return Err(AppError::InvalidCommand(format!(
                "unrecognized input '{}' (type 'help')",
                line.trim()
            )));
        }
    };
    Ok(action)
}

fn parse_bool(raw: &str) -> Result<bool, AppError> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(AppError::InvalidCommand(format!(
            "expected true or false (got '{raw}')"
        ))),
    }
}

fn summarize(state: &AppState, cart: &CartStore) -> CartSummary {
    let currency = state.config().currency;
    let session = cart.session_id().to_string();
    cart.select(|s| CartSummary::new(session, s, currency))
}

/// Log every cart change until the store is dropped.
fn spawn_change_logger(cart: &CartStore) -> JoinHandle<()> {
    let mut subscription = cart.subscribe();
    let session = cart.session_id();
    tokio::spawn(async move {
        while subscription.changed().await {
            let (item_count, is_open) =
                subscription.select(|s| (selectors::item_count(s), s.is_open()));
            info!(%session, item_count, is_open, "cart changed");
        }
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use sushi_shop_storefront::catalog::Catalog;
    use sushi_shop_storefront::config::{Environment, StorefrontConfig};

    use super::*;

    fn state() -> AppState {
        let config = StorefrontConfig {
            environment: Environment::Development,
            app_url: "http://localhost:3000".parse().unwrap(),
            currency: CurrencyCode::USD,
            sentry_dsn: None,
        };
        AppState::new(config, Catalog::sample())
    }

    #[test]
    fn test_parse_add_resolves_catalog() {
        let state = state();
        match parse_line(&state, "add 1").unwrap() {
            ShellAction::Dispatch(CartCommand::AddItem { item }) => {
                assert_eq!(item.name, "Salmon Nigiri");
            }
            other => panic!("expected add, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_add_unknown_product() {
        let err = parse_line(&state(), "add 404").unwrap_err();
        assert!(err.is_user_error());
        assert!(matches!(err, AppError::Catalog(_)));
    }

    #[test]
    fn test_parse_qty_allows_negative() {
        let action = parse_line(&state(), "qty 3 -2").unwrap();
        assert_eq!(
            action,
            ShellAction::Dispatch(CartCommand::SetQuantity {
                id: ProductId::new("3"),
                quantity: -2
            })
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let state = state();
        assert!(matches!(
            parse_line(&state, "qty 3 many"),
            Err(AppError::InvalidCommand(_))
        ));
        assert!(matches!(
            parse_line(&state, "open maybe"),
            Err(AppError::InvalidCommand(_))
        ));
        assert!(matches!(
            parse_line(&state, "dance"),
            Err(AppError::InvalidCommand(_))
        ));
        assert!(matches!(
            parse_line(&state, "clear now"),
            Err(AppError::InvalidCommand(_))
        ));
    }

    #[test]
    fn test_parse_simple_verbs() {
        let state = state();
        assert_eq!(
            parse_line(&state, "TOGGLE").unwrap(),
            ShellAction::Dispatch(CartCommand::ToggleOpen)
        );
        assert_eq!(
            parse_line(&state, "loading on").unwrap(),
            ShellAction::Dispatch(CartCommand::SetLoading { value: true })
        );
        assert_eq!(parse_line(&state, "show").unwrap(), ShellAction::Show);
        assert_eq!(parse_line(&state, "exit").unwrap(), ShellAction::Quit);
    }

    #[test]
    fn test_summary_render() {
        let state = state();
        let cart = state.open_cart();
        state.add_to_cart(&cart, &ProductId::new("7")).unwrap();
        state.add_to_cart(&cart, &ProductId::new("7")).unwrap();
        cart.set_open(true);

        let summary = summarize(&state, &cart);
        assert_eq!(summary.item_count, 2);
        assert_eq!(summary.subtotal.to_string(), "$17.98");

        let rendered = summary.render();
        assert!(rendered.contains("Vegan Avocado Roll"));
        assert!(rendered.contains("items: 2  subtotal: $17.98  panel: open"));
    }

    #[test]
    fn test_summary_render_empty() {
        let state = state();
        let cart = state.open_cart();
        let rendered = summarize(&state, &cart).render();
        assert!(rendered.starts_with("(cart is empty)"));
        assert!(rendered.contains("panel: closed"));
    }

    #[tokio::test]
    async fn test_replay_script_file() {
        let state = state();
        let dir = std::env::temp_dir().join(format!("sushi-cli-{}", std::process::id()));
        tokio::fs::create_dir_all(&dir).await.unwrap();
        let path = dir.join("script.yaml");
        tokio::fs::write(
            &path,
            "- command: toggle_open\n- command: set_loading\n  value: true\n",
        )
        .await
        .unwrap();

        replay(&state, &path, true).await.unwrap();
        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }
}
