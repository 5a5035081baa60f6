use std::env;

use dynform::{DialogResponse, DynformConfig};
use tracing_subscriber::EnvFilter;

/// Builds a two-field form, submits it to the configured endpoint and prints
/// the rendered result table.
///
/// Usage: `dynform [config.yaml] [name]`
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let mut args = env::args().skip(1);
    let config = match args.next() {
        Some(path) => DynformConfig::from_file(path)?,
        None => DynformConfig::default(),
    };
    let name = args.next().unwrap_or_else(|| "Alice".to_string());

    let mut session = config.session()?;
    let id = session.fields_mut().add_text().id();
    session.fields_mut().set_text(id, name)?;
    let mut dialog = || DialogResponse::Submitted(vec!["y".into(), "n".into()]);
    session.add_select_from_dialog(&mut dialog)?;

    session.submit().await?;

    if let Some(table) = session.result() {
        println!("{table}");
    }
    if let Some(notice) = session.notice() {
        println!("{}", notice.message);
    }

    Ok(())
}
