use resort_server::{Config, Server, ServerState, init_logger, init_logger_with_file, print_banner};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. 环境准备 (dotenv, 配置, 日志)
    dotenv::dotenv().ok();
    let config = Config::from_env();

    // 生产环境写入按天滚动的日志文件
    if config.is_production() {
        config.ensure_work_dir_structure()?;
        init_logger_with_file(None, config.log_dir().to_str());
    } else {
        init_logger();
    }

    print_banner();

    tracing::info!("Resort back-office server starting...");

    // 2. 初始化服务器状态 (数据库、JWT、默认管理员)
    let state = ServerState::initialize(&config).await;

    // 3. 启动 HTTP 服务器
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
