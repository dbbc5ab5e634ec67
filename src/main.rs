use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use serde::Serialize;

use slop_guard::cli::{Cli, ColorChoice, Commands, InitArgs, RulesArgs, ScanArgs};
use slop_guard::config::{Config, ConfigLoader, FileConfigLoader};
use slop_guard::engine::{ProjectAnalysis, ScanEngine, ScanReport};
use slop_guard::output::{
    ColorMode, JsonFormatter, OutputFormat, ReportFormatter, ScanProgress, TextFormatter,
};
use slop_guard::rules::{RuleMatcher, RuleQuery, RuleRegistry};
use slop_guard::scanner::{DirectoryScanner, FileScanner, GitignoreScanner, GlobFilter};
use slop_guard::{EXIT_CONFIG_ERROR, EXIT_FINDINGS, EXIT_SUCCESS};

const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Commands::Scan(args) => run_scan(args, &cli),
        Commands::Rules(args) => run_rules(args),
        Commands::Init(args) => run_init(args),
    };

    std::process::exit(exit_code);
}

fn run_scan(args: &ScanArgs, cli: &Cli) -> i32 {
    match run_scan_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_scan_impl(args: &ScanArgs, cli: &Cli) -> slop_guard::Result<i32> {
    // 1. Load configuration
    let config = load_config(args.config.as_deref(), cli.no_config)?;

    // 2. Build engine options: config first, CLI overrides on top
    let mut options = config.scan_options()?;
    if !args.languages.is_empty() {
        options.languages.clone_from(&args.languages);
    }
    if args.severity.is_some() {
        options.min_severity = args.severity;
    }
    let fail_on = args.fail_on.unwrap_or(config.scan.fail_on);

    // 3. Discover files
    let files = discover_files(args, &config)?;

    // 4. Scan (parallel across files)
    let engine = ScanEngine::new(options);
    let progress = ScanProgress::new(files.len() as u64, cli.quiet);
    let report = engine.scan_with(&files, || progress.inc());
    progress.finish();

    // 5. Project-level analyzers when requested
    let project = args
        .project
        .then(|| engine.analyze_project(&project_root(args)));

    // 6. Format and write output
    let color_mode = color_choice_to_mode(cli.color);
    let output = format_report(args.format, &report, project.as_ref(), color_mode)?;
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    // 7. Exit code from the failure severity
    let project_failed = project.as_ref().is_some_and(|analysis| {
        analysis
            .structure
            .violations
            .iter()
            .chain(&analysis.claims.violations)
            .any(|v| v.severity.meets(fail_on))
    });

    if report.has_findings_at(fail_on) || project_failed {
        Ok(EXIT_FINDINGS)
    } else {
        Ok(EXIT_SUCCESS)
    }
}

fn load_config(config_path: Option<&Path>, no_config: bool) -> slop_guard::Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

fn discover_files(args: &ScanArgs, config: &Config) -> slop_guard::Result<Vec<PathBuf>> {
    let extensions = args
        .ext
        .clone()
        .unwrap_or_else(|| config.scan.extensions.clone());
    let mut exclude_patterns = config.scan.exclude.clone();
    exclude_patterns.extend(args.exclude.clone());

    let filter = GlobFilter::new(extensions, &exclude_patterns)?;
    let use_gitignore = config.scan.gitignore && !args.no_gitignore;
    let scanner: Box<dyn FileScanner> = if use_gitignore {
        Box::new(GitignoreScanner::new(filter))
    } else {
        Box::new(DirectoryScanner::new(filter))
    };

    let mut files = Vec::new();
    for path in &args.paths {
        files.extend(scanner.scan(path)?);
    }
    Ok(files)
}

/// The root the project analyzers measure: the first directory argument,
/// or the current directory when only files were given.
fn project_root(args: &ScanArgs) -> PathBuf {
    args.paths
        .iter()
        .find(|path| path.is_dir())
        .cloned()
        .unwrap_or_else(|| PathBuf::from("."))
}

fn format_report(
    format: OutputFormat,
    report: &ScanReport,
    project: Option<&ProjectAnalysis>,
    color_mode: ColorMode,
) -> slop_guard::Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::new(color_mode).format(report, project),
        OutputFormat::Json => JsonFormatter.format(report, project),
    }
}

fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> slop_guard::Result<()> {
    if let Some(path) = output_path {
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

fn run_rules(args: &RulesArgs) -> i32 {
    match run_rules_impl(args) {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Serializable view of a rule; the compiled matcher itself stays opaque.
#[derive(Serialize)]
struct RuleInfo {
    name: &'static str,
    kind: &'static str,
    language: &'static str,
    severity: &'static str,
    remediation: &'static str,
    exclude_globs: &'static [&'static str],
}

fn run_rules_impl(args: &RulesArgs) -> slop_guard::Result<String> {
    let registry = RuleRegistry::new();
    let rules = registry.lookup(&RuleQuery {
        language: args.language,
        severity: args.severity,
        remediation: args.remediation,
    });

    let infos: Vec<RuleInfo> = rules
        .iter()
        .map(|rule| RuleInfo {
            name: rule.name,
            kind: match rule.matcher {
                RuleMatcher::Pattern(_) => "pattern",
                RuleMatcher::Structural(_) => "structural",
            },
            language: rule.language.map_or("all", |lang| lang.name()),
            severity: rule.severity.label(),
            remediation: rule.remediation.label(),
            exclude_globs: rule.exclude_globs,
        })
        .collect();

    match args.format {
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&infos)?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Text => Ok(format_rules_text(&infos)),
    }
}

fn format_rules_text(infos: &[RuleInfo]) -> String {
    use std::fmt::Write;

    let mut output = String::new();
    let _ = writeln!(
        output,
        "{:<24} {:<12} {:<12} {:<10} {:<12}",
        "NAME", "KIND", "LANGUAGE", "SEVERITY", "REMEDIATION"
    );
    for info in infos {
        let _ = writeln!(
            output,
            "{:<24} {:<12} {:<12} {:<10} {:<12}",
            info.name, info.kind, info.language, info.severity, info.remediation
        );
    }
    let _ = writeln!(output, "\n{} rule(s)", infos.len());
    output
}

fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_init_impl(args: &InitArgs) -> slop_guard::Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(slop_guard::SlopGuardError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

fn config_template() -> &'static str {
    r#"# slop-guard configuration file

[scan]
# File extensions eligible for scanning
extensions = ["rs", "go", "py", "js", "ts", "jsx", "tsx", "c", "cpp"]

# Glob patterns removed from file discovery
exclude = [
    "**/target/**",
    "**/node_modules/**",
    "**/.git/**",
    "**/vendor/**",
]

# Respect .gitignore during directory discovery
gitignore = true

# Findings at or above this severity exit with code 1
# (critical, high, medium, low)
fail_on = "high"

# Restrict scanning to these language families (empty = all)
# languages = ["rust", "python"]

[thresholds.doc_ratio]
# Flag when doc lines / body lines exceeds this ratio
max_ratio = 2.0
# Bodies shorter than this are exempt
min_function_lines = 5

[thresholds.verbosity]
# Flag when comment lines / code lines inside a body exceeds this ratio
max_comment_ratio = 1.0
min_code_lines = 10

[thresholds.structure]
# Over-engineering signals: files per export, lines per export, nesting
file_ratio = 20.0
lines_per_export = 500.0
max_depth = 4

[thresholds.claims]
# Evidence matches required per claimed quality category
min_evidence_matches = 3

[cache]
# Bounded exclusion caches (0 disables)
compiled_globs = 50
exclusion_results = 200
"#
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
