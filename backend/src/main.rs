use backend::config::StoreConfig;
use backend::services::records::RecordService;
use backend::storage::SqliteStorage;
use common::listing;
use env_logger::Env;
use log::info;
use std::error::Error;

const USAGE: &str = "usage: backend [list | delete <id>]";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = StoreConfig::from_env();
    let storage = SqliteStorage::open(&config.db_path)?;
    let service = RecordService::from_config(storage, &config);
    info!(
        "record store at {} (key {})",
        config.db_path.display(),
        config.storage_key
    );

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
        [] | ["list"] => {
            let records = service.list().await?;
            let (basic, extended) = listing::partition_by_origin(&records);
            info!(
                "{} records ({} basic, {} extended)",
                records.len(),
                basic.len(),
                extended.len()
            );
            println!(
                "{}",
                serde_json::to_string_pretty(&listing::consolidated(&records))?
            );
        }
        ["delete", id] => {
            let id: u64 = id.parse().map_err(|_| format!("invalid id: {id}"))?;
            service.delete(id).await?;
        }
        _ => return Err(USAGE.into()),
    }
    Ok(())
}
