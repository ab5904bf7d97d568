use clap::Parser;
use roster::utils::error::{ErrorSeverity, RosterError};
use roster::utils::{logger, validation::Validate};
use roster::{sample_people, CliConfig, ReportEngine};

fn exit_with(e: &RosterError) -> ! {
    tracing::error!(
        "❌ Roster run failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

fn main() {
    let cli = CliConfig::parse();

    // 配置檔讀取失敗時，以命令列的 verbose 設定初始化日誌
    let settings = match cli.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            logger::init_cli_logger(cli.verbose);
            exit_with(&e);
        }
    };

    if settings.uses_json_logs() {
        logger::init_json_logger(settings.verbose);
    } else {
        logger::init_cli_logger(settings.verbose);
    }

    tracing::info!("Starting roster");
    tracing::debug!("Resolved settings: {:?}", settings);

    if let Err(e) = settings.validate() {
        exit_with(&e);
    }

    let people = match sample_people() {
        Ok(people) => people,
        Err(e) => exit_with(&e),
    };

    let engine = ReportEngine::new(settings);
    match engine.build(&people) {
        Ok(report) => {
            print!("{}", report.render());
            tracing::info!("✅ Report generated for {} people", report.total_people);
        }
        Err(e) => exit_with(&e),
    }
}
