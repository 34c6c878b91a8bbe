use anyhow::Result;
use gaokao_recite::{logger, App, Config};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 加载配置
    let config = Config::from_env()?;

    // 初始化日志
    logger::init_with_verbose(config.verbose_logging);

    // 生成文档
    if let Err(e) = App::initialize(config).run().await {
        tracing::error!("❌ 文档生成失败: {:#}", e);
        return Err(e);
    }

    Ok(())
}
