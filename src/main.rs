use std::net::SocketAddr;

use sekigae_server::config::{database, AppConfig};
use sekigae_server::state::AppState;
use sekigae_server::utils::logging;
use sekigae_server::app;

#[tokio::main]
async fn main() {
    // 1. 環境変数ロード
    dotenvy::dotenv().ok();

    // 2. ロギング初期化（ガードはプロセス終了まで保持する）
    let _guard = logging::init_logging();

    // 3. 設定ロード
    let config = AppConfig::from_env().expect("Failed to load configuration");

    // 4. データベース接続
    let db = database::establish_connection(&config.database_url, config.schema_update)
        .await
        .expect("Failed to connect to the database");

    // 5. ルーター設定
    let state = AppState {
        db,
        config: config.clone(),
    };
    let app = app(state);

    // 6. サーバー実行
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind server address");
    axum::serve(listener, app).await.expect("Server error");
}
