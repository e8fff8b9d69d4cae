//! baleum - 발음 평가 데모 CLI
//!
//! 목표 텍스트와 CTC 디코딩 토큰 텍스트를 받아 평가 결과를
//! JSON으로 출력합니다. 음향 추론과 HTTP 서빙은 별도 구성 요소이며,
//! 이 바이너리는 로컬 확인용입니다.

use std::path::Path;
use std::process::ExitCode;

use baleum::config::{load_config, EvalConfig};
use baleum::core::reconstructor::reconstruct;
use baleum::core::symbol::parse_stream;
use baleum::scoring::engine::evaluate_with;
use baleum::scoring::table::{ConfusionTable, DEFAULT_TABLE};

fn print_usage() {
    eprintln!("사용법: baleum [옵션] <목표 텍스트> <디코딩 토큰 텍스트>");
    eprintln!();
    eprintln!("옵션:");
    eprintln!("  --config <path>   평가 설정 JSON 파일");
    eprintln!("  --table <path>    혼동 테이블 JSON 파일");
    eprintln!();
    eprintln!("예시:");
    eprintln!("  baleum 감자 \"ㄱ ㅏ ㅁ* ㅈ ㅏ\"");
}

fn main() -> ExitCode {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut config = EvalConfig::default();
    let mut table: Option<ConfusionTable> = None;
    let mut positional: Vec<String> = Vec::new();

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => match args.next() {
                Some(path) => config = load_config(Path::new(&path)),
                None => {
                    eprintln!("--config 옵션에 경로가 필요합니다.");
                    return ExitCode::FAILURE;
                }
            },
            "--table" => match args.next() {
                Some(path) => match ConfusionTable::load(&path) {
                    Ok(t) => table = Some(t),
                    Err(e) => {
                        eprintln!("혼동 테이블 로드 실패: {}", e);
                        return ExitCode::FAILURE;
                    }
                },
                None => {
                    eprintln!("--table 옵션에 경로가 필요합니다.");
                    return ExitCode::FAILURE;
                }
            },
            _ => positional.push(arg),
        }
    }

    let (target_text, decoded_text) = match (positional.first(), positional.get(1)) {
        (Some(t), Some(d)) => (t.clone(), d.clone()),
        _ => {
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    let decoded = parse_stream(&decoded_text);
    let result = match &table {
        Some(t) => evaluate_with(t, &config, &target_text, &decoded),
        None => evaluate_with(&DEFAULT_TABLE, &config, &target_text, &decoded),
    };
    let is_correct = result.is_correct;

    let mut report = match serde_json::to_value(&result) {
        Ok(serde_json::Value::Object(map)) => map,
        _ => {
            eprintln!("결과 직렬화 실패");
            return ExitCode::FAILURE;
        }
    };
    report.insert(
        "decoded_text".into(),
        serde_json::Value::String(reconstruct(&decoded)),
    );

    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("결과 직렬화 실패: {}", e);
            return ExitCode::FAILURE;
        }
    }

    if is_correct {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
