// Rust Record Query Engine - Main executable
// Author: Gabriel Demetrios Lafis

use clap::{App, Arg};
use log::{info, warn};
use serde_json::json;

use rust_record_query_engine::{
    records::{sample_books, sample_employees, sample_products, sample_students},
    report::{
        books_report_json, books_report_text, employees_report_json, employees_report_text,
        products_report_json, products_report_text, students_report_json, students_report_text,
        ReportCase,
    },
    utils::{init_logging, Config},
};

fn main() {
    // Parse command line arguments
    let matches = App::new("Rust Record Query Engine")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Gabriel Demetrios Lafis")
        .about("Functional-style queries over in-memory record sets")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Sets a custom config file")
                .takes_value(true),
        )
        .subcommand(
            App::new("run")
                .about("Run the demo reports")
                .arg(
                    Arg::new("case")
                        .short('k')
                        .long("case")
                        .value_name("CASE")
                        .help("Report case to run: students, products, books, employees or all")
                        .takes_value(true),
                )
                .arg(
                    Arg::new("format")
                        .short('f')
                        .long("format")
                        .value_name("FORMAT")
                        .help("Output format: text or json")
                        .takes_value(true),
                ),
        )
        .get_matches();

    // Load configuration
    let config = if let Some(config_path) = matches.value_of("config") {
        match Config::from_file(config_path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("Error loading config file: {}", err);
                Config::default()
            }
        }
    } else {
        Config::default()
    };

    // Initialize logging
    if let Err(err) = init_logging(config.log_level_filter()) {
        eprintln!("Error initializing logger: {}", err);
    }

    // Handle subcommands
    if let Some(matches) = matches.subcommand_matches("run") {
        // Override config with command line arguments
        let format = matches
            .value_of("format")
            .unwrap_or(&config.output.format)
            .to_lowercase();

        let case_names: Vec<String> = match matches.value_of("case") {
            Some(case) => vec![case.to_string()],
            None => config.output.cases.clone(),
        };

        let cases = resolve_cases(&case_names);
        if cases.is_empty() {
            warn!("No valid report case in {:?}, nothing to do", case_names);
            return;
        }

        info!("Running {} report case(s), format '{}'", cases.len(), format);
        run_reports(&cases, &format);
    } else {
        println!("No subcommand specified. Use --help for usage information.");
    }
}

/// Expand configured case names into report cases, dropping unknown names
fn resolve_cases(names: &[String]) -> Vec<ReportCase> {
    let mut cases = Vec::new();

    for name in names {
        if name.to_lowercase() == "all" {
            return ReportCase::all().to_vec();
        }

        match ReportCase::parse(name) {
            Some(case) => cases.push(case),
            None => warn!("Unknown report case '{}', skipping", name),
        }
    }

    cases
}

fn run_reports(cases: &[ReportCase], format: &str) {
    let students = sample_students();
    let products = sample_products();
    let books = sample_books();
    let employees = sample_employees();

    if format == "json" {
        let mut output = json!({});

        for case in cases {
            let report = match case {
                ReportCase::Students => students_report_json(&students),
                ReportCase::Products => products_report_json(&products),
                ReportCase::Books => books_report_json(&books),
                ReportCase::Employees => employees_report_json(&employees),
            };
            output[case.name()] = report;
        }

        println!("{:#}", output);
    } else {
        let mut sections = Vec::new();

        for case in cases {
            sections.push(match case {
                ReportCase::Students => students_report_text(&students),
                ReportCase::Products => products_report_text(&products),
                ReportCase::Books => books_report_text(&books),
                ReportCase::Employees => employees_report_text(&employees),
            });
        }

        println!("{}", sections.join("\n\n"));
    }
}
