use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use ecoleta_registration_client::models::common::Coordinate;
use ecoleta_registration_client::models::point::ContactField;
use ecoleta_registration_client::views::success_view;
use ecoleta_registration_client::{
    EcoletaClient, EnvLocationSource, FormEvent, IbgeClient, RegistrationSession, Route,
};

// Translate one stdin line into a form event. Unknown or malformed lines
// yield nothing and are reported by the caller.
fn parse_command(line: &str) -> Option<FormEvent> {
    let trimmed = line.trim();
    let (command, rest) = trimmed.split_once(' ').unwrap_or((trimmed, ""));

    match command {
        "name" => Some(FormEvent::Input(ContactField::Name, rest.trim().to_string())),
        "email" => Some(FormEvent::Input(ContactField::Email, rest.trim().to_string())),
        "whatsapp" => Some(FormEvent::Input(
            ContactField::Whatsapp,
            rest.trim().to_string(),
        )),
        "uf" => Some(FormEvent::UfSelected(parse_selection(rest))),
        "city" => Some(FormEvent::CitySelected(parse_selection(rest))),
        "map" => {
            let mut parts = rest.split_whitespace();
            let latitude = parts.next()?.parse().ok()?;
            let longitude = parts.next()?.parse().ok()?;
            Some(FormEvent::MapClicked(Coordinate::new(latitude, longitude)))
        }
        "item" => rest.trim().parse().ok().map(FormEvent::ItemToggled),
        "submit" => Some(FormEvent::Submit),
        _ => None,
    }
}

// "0" is the dropdowns' "not selected" option in the browser form; an empty
// value means the same thing here
fn parse_selection(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() || value == "0" {
        None
    } else {
        Some(value.to_string())
    }
}

#[tokio::main]
async fn main() {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Initialize the backend, localities and position clients
    let api = EcoletaClient::new();
    let geography = IbgeClient::new();
    let location = EnvLocationSource;

    info!("Using backend endpoint {}", api.endpoint());
    info!("Using localities endpoint {}", geography.endpoint());

    let (tx, rx) = mpsc::unbounded_channel();

    // Feed stdin commands into the session's event stream; dropping the
    // sender closes the stream and ends the session.
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        while let Ok(Some(line)) = lines.next_line().await {
            if line.trim() == "quit" {
                break;
            }

            match parse_command(&line) {
                Some(event) => {
                    if tx.send(event).is_err() {
                        break;
                    }
                }
                None => warn!("Unrecognized command: {}", line.trim()),
            }
        }
    });

    println!("Cadastro do ponto de coleta");
    println!(
        "Commands: name|email|whatsapp <text>, uf <SP|0>, city <name|0>, \
         map <lat> <lng>, item <id>, submit, quit"
    );

    let mut session = RegistrationSession::new(api, geography, location);
    let route = session.run(rx).await;

    match route {
        Route::Success => println!("{}", success_view()),
        Route::CreatePoint => info!("Session ended without a submission"),
    }
}
