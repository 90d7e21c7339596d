use jobmatch::db::establish_connection_pool;
use jobmatch::models::config::MatcherConfig;
use jobmatch::processing::embedding::FastembedEmbedder;
use jobmatch::processing::matching::process_match_run;
use jobmatch::repository::DieselRepository;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = match MatcherConfig::load() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    let pool = match establish_connection_pool(&config.database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };
    let repo = DieselRepository::new(pool);

    let mut embedder = match FastembedEmbedder::try_new() {
        Ok(embedder) => embedder,
        Err(e) => {
            log::error!("Failed to initialize embedder: {e}");
            std::process::exit(1);
        }
    };

    if process_match_run(&repo, &mut embedder, config.top_k)
        .await
        .is_err()
    {
        std::process::exit(1);
    }
}
