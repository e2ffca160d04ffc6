use returns_dashboard::{router, AppConfig, AppState, DashboardService, PhotoProber, ReturnsClient};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::fmt::time::ChronoLocal;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 初始化日志 - 本地时间格式
    tracing_subscriber::fmt()
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()))
        .with_target(true)
        .with_level(true)
        .init();

    // 加载配置
    let config = AppConfig::from_env()?;
    info!("Starting server with config: {:?}", config);

    let client = ReturnsClient::new(&config.upstream)?;
    let state = AppState {
        dashboard: Arc::new(DashboardService::new(client)),
        photos: Arc::new(PhotoProber::new(&config.photos)?),
    };

    let app = router(state);

    // 启动服务器
    let addr = format!("{}:{}", config.server.host, config.server.port);
    info!("Server listening on {}", addr);
    info!("API Endpoints:");
    info!("  GET  /api/dashboard?date=      - scanner/classification counts");
    info!("  GET  /api/returns?date=        - upstream returns (filtered)");
    info!("  GET  /api/returns/summary      - carrier/part summary of upstream returns");
    info!("  GET  /api/photos?id=           - photo lookup");
    info!("  POST /api/summary?format=      - summarize uploaded CSV export");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
