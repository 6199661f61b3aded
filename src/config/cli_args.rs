use clap::Parser;

use crate::provider::Provider;

// Apptestor - 针对本地设备和云端设备农场执行移动应用测试
#[derive(Parser, Debug)]
#[clap(
    name = "apptestor",
    version,
    about = "Dispatch mobile app test suites to local devices and cloud device farms",
    after_help = "PROVIDERS (required environment variables):\n  local-android          LOCAL_ANDROID_DEVICE_UDID, LOCAL_ANDROID_PLATFORM_VERSION,\n                         APP_ACTIVITY, APP_PACKAGE\n  bitbar-android         BITBAR_API_KEY, BITBAR_APP_ID, BITBAR_DEVICE_NAME, BITBAR_URL,\n                         APP_ACTIVITY, APP_PACKAGE\n  local-ios              LOCAL_IOS_DEVICE_UDID, BUNDLE_ID\n  sauce-ios              SAUCE_USERNAME, SAUCE_ACCESS_KEY, SAUCE_DEVICE_NAME,\n                         SAUCE_PLATFORM_VERSION, SAUCE_URL, BUNDLE_ID\n\nEXAMPLES:\n  apptestor --provider local-android\n  apptestor -p sauce-ios -t tests/smoke/\n  apptestor -p bitbar-android --dry-run"
)]
pub struct CliArgs {
    // Target provider - Where the test suite will be executed
    // 目标提供商 - 测试套件的执行环境
    #[clap(
        short = 'p',
        long = "provider",
        value_parser = Provider::from_name,
        help = "Target execution provider"
    )]
    pub provider: Provider,

    // Test path - Forwarded verbatim to the runner
    // 测试路径 - 原样传递给测试运行器
    #[clap(
        short = 't',
        long = "test-path",
        default_value = "tests/",
        help = "Test path forwarded to the runner"
    )]
    pub test_path: String,

    // Runner binary - The external test runner to invoke
    // 运行器二进制 - 要调用的外部测试运行器
    #[clap(long = "runner", default_value = "pytest", help = "Test runner binary")]
    pub runner: String,

    // Dry run - Validate and print the command without launching the runner
    // 试运行 - 校验并打印命令但不启动运行器
    #[clap(short = 'n', long = "dry-run", help = "Print the assembled command without executing it")]
    pub dry_run: bool,

    // Verbose mode - Show more log information
    // 详细模式 - 显示更多日志信息
    #[clap(short = 'v', long = "verbose", help = "Enable verbose logging")]
    pub verbose: bool,

    // Quiet mode - Suppress non-essential output
    // 安静模式 - 不显示非必要输出
    #[clap(short = 'q', long = "quiet", help = "Suppress non-essential output")]
    pub quiet: bool,
}

impl CliArgs {
    /// Parse command line arguments
    /// 解析命令行参数
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get log level
    /// 获取日志级别
    pub fn get_log_level(&self) -> &str {
        if self.quiet {
            "error"
        } else if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}
