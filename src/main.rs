use clap::{Parser, Subcommand};

use calorimetry_toolbox::calorimetry::{self, report};
use calorimetry_toolbox::{app, config, i18n};

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
#[derive(Parser)]
#[command(name = "calorimetry_toolbox_cli", version, about = "Phase-change heat calculator")]
struct Cli {
    /// 언어 코드 (auto/ko/en)
    #[arg(short = 'L', long)]
    lang: Option<String>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// 대화형 메뉴 없이 열량을 한 번 계산해 보고서를 출력한다.
    Compute {
        /// 물질 키 (Water/Aluminum/Copper/Iron)
        #[arg(long)]
        material: String,
        /// 질량 [kg]
        #[arg(long)]
        mass: f64,
        /// 초기 온도 [°C]
        #[arg(long)]
        from: f64,
        /// 최종 온도 [°C]
        #[arg(long)]
        to: f64,
    },
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = try_run(cli) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn try_run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut cfg = config::load_or_default()?;
    let lang = i18n::resolve_language(
        cli.lang.as_deref().unwrap_or(""),
        Some(cfg.language.as_str()),
    );
    let tr = i18n::Translator::new_with_pack(&lang, None);

    match cli.command {
        Some(Command::Compute {
            material,
            mass,
            from,
            to,
        }) => {
            let breakdown = calorimetry::compute_heat_for(&material, mass, from, to)?;
            print!("{}", report::render_report(&breakdown, &tr));
        }
        None => app::run(&mut cfg, &tr)?,
    }
    Ok(())
}
