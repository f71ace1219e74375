use clap::Parser;

/// Cryptory 管理后台
#[derive(Parser, Debug)]
#[command(name = "cryptory-admin", version, about)]
pub struct Args {
    /// 配置文件路径
    #[arg(short, long)]
    pub config: Option<String>,

    /// 监听地址（覆盖配置文件）
    #[arg(long)]
    pub host: Option<String>,

    /// 监听端口（覆盖配置文件）
    #[arg(short, long)]
    pub port: Option<u16>,
}
