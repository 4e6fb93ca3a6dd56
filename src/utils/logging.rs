//! ロギング初期化モジュール
//!
//! JSON形式の構造化ロギングを提供する。
//! stdoutと日別ログファイルに同時出力する。

use tracing_appender::rolling;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// ロギングシステムを初期化する。
///
/// JSONフォーマットでログを出力し、環境変数 `RUST_LOG` でログレベルを
/// 設定できる。既定値は `info,sekigae_server=debug`。
///
/// ログはstdoutと `logs/` ディレクトリの日別ファイルに同時出力される。
/// ファイル名形式: `sekigae.log.YYYY-MM-DD`
///
/// 返される `WorkerGuard` をmainで保持しないと、プロセス終了時に
/// バッファ済みログが失われる。
pub fn init_logging() -> tracing_appender::non_blocking::WorkerGuard {
    let log_dir = std::env::var("LOG_DIR").unwrap_or_else(|_| "logs".to_string());

    let file_appender = rolling::daily(&log_dir, "sekigae.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let stdout_layer = fmt::layer()
        .json()
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .with_current_span(true)
        .flatten_event(false);

    let file_layer = fmt::layer()
        .json()
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .with_current_span(true)
        .flatten_event(false)
        .with_ansi(false)
        .with_writer(non_blocking);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,sekigae_server=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .or_else(|err| {
            // 二重初期化はsourceのダウンキャストで検出する
            use std::error::Error;
            if err
                .source()
                .and_then(|s| s.downcast_ref::<tracing::dispatcher::SetGlobalDefaultError>())
                .is_some()
            {
                // 初期化済みなら無視してよい
                return Ok(());
            }
            eprintln!("Failed to initialize tracing: {}", err);
            Err(err)
        })
        .ok(); // ロギングに失敗してもサーバー自体は起動させる

    guard
}
