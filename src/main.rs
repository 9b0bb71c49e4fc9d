//! csvjson - CSV TO JSON CONVERTER
//!
//! 메인 엔트리포인트

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use env_logger::Env;
use std::path::Path;

use csvjson::{
    cli::Args,
    processor::{convert_file, write_output, Conversion},
};

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.verbose);

    let options = args.to_options()?;

    if args.verbose {
        print_header(&args);
    }

    let mut conversion = convert_file(&args.input, &options)?;

    match args.output {
        Some(ref output) => write_to_file(output, &mut conversion)?,
        None => write_to_console(&mut conversion),
    }

    if args.verbose {
        conversion.stats.print_summary();
    }

    Ok(())
}

/// 로거 초기화 (RUST_LOG가 있으면 우선)
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

/// 헤더 출력 (stderr)
fn print_header(args: &Args) {
    eprintln!("\n{}", "═".repeat(50).bright_blue());
    eprintln!("{}", " 🚀 CSV TO JSON CONVERTER".bright_white().bold());
    eprintln!("{}", "═".repeat(50).bright_blue());
    eprintln!("  {} 입력 파일: {:?}", "📂".bright_cyan(), args.input);

    match args.output {
        Some(ref output) => eprintln!("  {} 출력 파일: {:?}", "📄".bright_green(), output),
        None => eprintln!("  {} 출력: 콘솔", "📄".bright_green()),
    }

    if let Some(ref include) = args.include {
        eprintln!("  {} 포함 컬럼: {}", "🎯".bright_cyan(), include);
    }

    if let Some(ref exclude) = args.exclude {
        eprintln!("  {} 제외 컬럼: {}", "🚫".bright_red(), exclude);
    }

    eprintln!("  {} 키 포맷: {}", "🔤".bright_yellow(), args.key_format);

    if args.pretty {
        eprintln!(
            "  {} {}",
            "✨".bright_magenta(),
            "Pretty 출력 모드".magenta()
        );
    }

    eprintln!("{}", "═".repeat(50).bright_blue());
}

/// 콘솔 출력
fn write_to_console(conversion: &mut Conversion) {
    println!("{}", conversion.json);
    conversion
        .stats
        .add_bytes_written(conversion.json.len() as u64 + 1);

    let message = format!(
        "처리된 레코드: {}개, 콘솔에 출력했습니다",
        conversion.record_count()
    );
    println!("\n{}", message.bright_green());
}

/// 파일 출력
fn write_to_file(output: &Path, conversion: &mut Conversion) -> Result<()> {
    let written = write_output(output, &conversion.json)
        .with_context(|| format!("출력 파일 저장 실패: {}", output.display()))?;
    conversion.stats.add_bytes_written(written);

    let message = format!(
        "처리된 레코드: {}개, 저장 완료: {}",
        conversion.record_count(),
        output.display()
    );
    println!("{} {}", "✅".bright_green(), message.bright_green());
    Ok(())
}
