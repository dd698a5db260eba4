//! Command line front end for the back-office console.
//!
//! ```text
//! ucard-admin captcha
//! ucard-admin login <user> <password> <captcha-key> <captcha-code>
//! ucard-admin logout
//! ucard-admin <collection> [search] [page] [--filter field=value]... [--page-size n]
//! ucard-admin delete-user <id>
//! ucard-admin set-config <key> <value> [remark]
//! ucard-admin update-config <id> <key> <value> [remark]
//! ucard-admin audit <id> approve|reject [remark]
//! ```

use std::env;
use std::time::Duration;

use config::Config;
use dotenvy::dotenv;
use serde::Serialize;
use thiserror::Error;

use ucard_admin::domain::admin::AdminAccount;
use ucard_admin::domain::card::Card;
use ucard_admin::domain::card_application::CardApplication;
use ucard_admin::domain::collection::{CollectionSpec, ListEntity, find_collection};
use ucard_admin::domain::config_entry::ConfigEntry;
use ucard_admin::domain::deposit::Deposit;
use ucard_admin::domain::kyc::KycRecord;
use ucard_admin::domain::session::SessionHandle;
use ucard_admin::domain::types::{PageSize, TypeConstraintError};
use ucard_admin::domain::user::User;
use ucard_admin::domain::wallet_log::WalletLedgerEntry;
use ucard_admin::domain::withdrawal::Withdrawal;
use ucard_admin::dto::notification::Notification;
use ucard_admin::forms::FormError;
use ucard_admin::forms::config::ConfigForm;
use ucard_admin::forms::filters::parse_filters;
use ucard_admin::forms::login::LoginForm;
use ucard_admin::forms::withdrawal::AuditWithdrawalForm;
use ucard_admin::models::config::ClientConfig;
use ucard_admin::query::StructuredFilter;
use ucard_admin::repository::errors::RepositoryError;
use ucard_admin::repository::{FileSessionStore, HttpRepository};
use ucard_admin::services::controller::{EntityListController, LoadState};
use ucard_admin::services::{self, ServiceError, auth, configs, users, withdrawals};

#[derive(Debug, Error)]
enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error("{0}")]
    Failed(String),

    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error(transparent)]
    Form(#[from] FormError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    TypeConstraint(#[from] TypeConstraintError),

    #[error("output error: {0}")]
    Output(#[from] serde_json::Error),
}

type CliResult = Result<(), CliError>;

struct App {
    config: ClientConfig,
    store: FileSessionStore,
    session: SessionHandle,
    repo: HttpRepository,
}

/// Positional and flag arguments of a list command.
struct ListArgs {
    search: String,
    page: usize,
    page_size: PageSize,
    filters: Vec<StructuredFilter>,
}

impl ListArgs {
    fn parse(args: &[String], default_page_size: PageSize) -> Result<Self, CliError> {
        let mut positional = Vec::new();
        let mut raw_filters = Vec::new();
        let mut page_size = default_page_size;

        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--filter" => raw_filters.push(next_value(&mut iter, "--filter")?),
                "--page-size" => {
                    let value = next_value(&mut iter, "--page-size")?;
                    page_size = PageSize::new(parse_number(value, "page size")?)?;
                }
                _ => positional.push(arg.as_str()),
            }
        }

        let search = positional.first().copied().unwrap_or_default().to_string();
        let page = match positional.get(1) {
            Some(page) => parse_number(page, "page")?,
            None => 1,
        };

        Ok(Self {
            search,
            page,
            page_size,
            filters: parse_filters(raw_filters)?,
        })
    }
}

fn next_value<'a>(
    iter: &mut impl Iterator<Item = &'a String>,
    flag: &str,
) -> Result<&'a str, CliError> {
    iter.next()
        .map(String::as_str)
        .ok_or_else(|| CliError::Usage(format!("{flag} needs a value")))
}

fn parse_number<T: std::str::FromStr>(value: &str, what: &str) -> Result<T, CliError> {
    value
        .trim()
        .parse()
        .map_err(|_| CliError::Usage(format!("invalid {what}: {value}")))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> CliResult {
    println!("{}", serde_json::to_string(value)?);
    Ok(())
}

fn report(notification: Notification) -> CliResult {
    print_json(&notification)
}

fn list_rows<E>(app: &App, args: ListArgs) -> CliResult
where
    E: ListEntity + Serialize,
{
    let mut controller: EntityListController<E> = EntityListController::new(
        args.page_size,
        Duration::from_millis(app.config.search_debounce_ms),
    );

    controller.set_filters(args.filters);
    controller.submit_search(&args.search);
    let ticket = controller.change_page(args.page)?;
    controller.load(&app.repo, ticket);

    if let LoadState::Failed(message) = controller.state() {
        return Err(CliError::Failed(message.clone()));
    }

    let view = controller.view();
    for row in &view.items {
        print_json(row)?;
    }
    println!(
        "total: {} (page {} of {})",
        view.total,
        view.page,
        controller.pagination().total_pages()
    );
    Ok(())
}

fn list_collection(app: &App, collection: &CollectionSpec, args: ListArgs) -> CliResult {
    match collection.name {
        "users" => list_rows::<User>(app, args),
        "cards" => list_rows::<Card>(app, args),
        "card-applications" => list_rows::<CardApplication>(app, args),
        "admins" => list_rows::<AdminAccount>(app, args),
        "kyc" => list_rows::<KycRecord>(app, args),
        "wallet-logs" => list_rows::<WalletLedgerEntry>(app, args),
        "withdrawals" => list_rows::<Withdrawal>(app, args),
        "deposits" => list_rows::<Deposit>(app, args),
        "configs" => list_rows::<ConfigEntry>(app, args),
        other => Err(CliError::Usage(format!("unknown collection: {other}"))),
    }
}

fn config_form(id: Option<i64>, args: &[String]) -> Result<ConfigForm, CliError> {
    match args {
        [key, value, rest @ ..] if rest.len() <= 1 => Ok(ConfigForm {
            id,
            key: key.clone(),
            value: value.clone(),
            remark: rest.first().cloned(),
        }),
        _ => Err(CliError::Usage(
            "expected <key> <value> [remark]".to_string(),
        )),
    }
}

fn run(app: &App, args: &[String]) -> CliResult {
    let Some((command, rest)) = args.split_first() else {
        return Err(CliError::Usage("missing command".to_string()));
    };

    match command.as_str() {
        "captcha" => {
            let captcha = auth::fetch_captcha(&app.repo)?;
            println!("key: {}", captcha.key);
            println!("image: {}", captcha.image);
            Ok(())
        }
        "login" => {
            let [username, password, captcha_key, captcha_code] = rest else {
                return Err(CliError::Usage(
                    "expected <user> <password> <captcha-key> <captcha-code>".to_string(),
                ));
            };
            let form = LoginForm {
                username: username.clone(),
                password: password.clone(),
                captcha_key: captcha_key.clone(),
                captcha_code: captcha_code.clone(),
            };
            let result = auth::login(&app.repo, &app.store, &app.session, form);
            report(services::notify(&result, "Signed in"))?;
            result.map(|_| ()).map_err(CliError::from)
        }
        "logout" => {
            auth::logout(&app.store, &app.session)?;
            report(Notification::success("Signed out"))
        }
        "delete-user" => {
            let [id] = rest else {
                return Err(CliError::Usage("expected <id>".to_string()));
            };
            let result = users::delete_user(
                &app.repo,
                &app.session.snapshot(),
                parse_number(id, "user id")?,
            );
            report(services::notify(&result, "User deleted"))?;
            result.map_err(CliError::from)
        }
        "set-config" | "update-config" => {
            let (id, fields) = if command.as_str() == "update-config" {
                let Some((id, fields)) = rest.split_first() else {
                    return Err(CliError::Usage("expected <id>".to_string()));
                };
                (Some(parse_number(id, "config id")?), fields)
            } else {
                (None, rest)
            };
            let form = config_form(id, fields)?;
            let result = configs::save_config(&app.repo, &app.session.snapshot(), form);
            report(services::notify(&result, "Config saved"))?;
            result.map_err(CliError::from)
        }
        "audit" => {
            let (id, decision, remark) = match rest {
                [id, decision] => (id, decision, None),
                [id, decision, remark] => (id, decision, Some(remark.clone())),
                _ => {
                    return Err(CliError::Usage(
                        "expected <id> approve|reject [remark]".to_string(),
                    ));
                }
            };
            let approve = match decision.as_str() {
                "approve" => true,
                "reject" => false,
                other => return Err(CliError::Usage(format!("unknown decision: {other}"))),
            };
            let form = AuditWithdrawalForm {
                id: parse_number(id, "withdrawal id")?,
                approve,
                remark,
            };
            let result = withdrawals::audit_withdrawal(&app.repo, &app.session.snapshot(), form);
            report(services::notify(&result, "Withdrawal audited"))?;
            result.map(|_| ()).map_err(CliError::from)
        }
        name => {
            let collection = find_collection(name)
                .ok_or_else(|| CliError::Usage(format!("unknown command: {name}")))?;
            let args = ListArgs::parse(rest, app.config.page_size()?)?;
            list_collection(app, collection, args)
        }
    }
}

fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let settings = Config::builder()
        .add_source(config::File::with_name("config/default").required(false))
        .add_source(config::File::with_name(&format!("config/{}", app_env)).required(false))
        .add_source(config::Environment::with_prefix("APP"))
        .build();

    let settings = match settings {
        Ok(settings) => settings,
        Err(err) => {
            log::error!("Error loading settings: {}", err);
            std::process::exit(1);
        }
    };

    let config = match settings.try_deserialize::<ClientConfig>() {
        Ok(config) => config,
        Err(err) => {
            log::error!("Error loading client config: {}", err);
            std::process::exit(1);
        }
    };

    let store = FileSessionStore::new(config.session_file.clone());
    let session = match auth::load_session(&store) {
        Ok(session) => SessionHandle::new(session),
        Err(err) => {
            log::error!("Failed to read session file: {}", err);
            std::process::exit(1);
        }
    };

    let repo = match HttpRepository::new(&config, session.clone()) {
        Ok(repo) => repo,
        Err(err) => {
            log::error!("Failed to build HTTP client: {}", err);
            std::process::exit(1);
        }
    };

    let app = App {
        config,
        store,
        session,
        repo,
    };

    let args: Vec<String> = env::args().skip(1).collect();
    if let Err(err) = run(&app, &args) {
        log::error!("{err}");
        std::process::exit(1);
    }
}
