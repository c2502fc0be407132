use std::path::PathBuf;

use anyhow::{bail, Context};
use autocomplete_core::{Autocomplete, Key, MenuRow, SelectMode, SelectionEvent, WidgetConfig};
use autocomplete_source::{normalize_options, parse_option_payload, LabelStyle};
use clap::{Parser, ValueEnum};
use simplelog::{Config, LevelFilter, SimpleLogger};

#[derive(Parser, Debug)]
#[command(
    name = "autocomplete-cli",
    about = "Chạy thử widget autocomplete với payload JSON và một chuỗi phím."
)]
struct Args {
    /// Đường dẫn tới file payload `{ "success": true, "<key>": [...] }`.
    #[arg(short, long)]
    input: PathBuf,

    /// Tên mảng lựa chọn trong payload (drugs, reactions, conditions, medications...).
    #[arg(short, long, default_value = "items")]
    key: String,

    #[arg(short, long, value_enum, default_value_t = ModeArg::Single)]
    mode: ModeArg,

    /// Nội dung gõ vào ô nhập.
    #[arg(short, long, default_value = "")]
    query: String,

    /// Chuỗi phím cách nhau bởi dấu phẩy: down, up, enter, esc.
    #[arg(long, value_delimiter = ',')]
    keys: Vec<String>,

    #[arg(long)]
    max_results: Option<usize>,

    /// Sắp xếp nhãn theo bảng chữ cái.
    #[arg(long)]
    sort: bool,

    /// Viết hoa chữ cái đầu mỗi từ trong nhãn.
    #[arg(long)]
    capitalize: bool,

    /// In trạng thái cuối dưới dạng JSON.
    #[arg(long)]
    json: bool,

    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    Single,
    Multi,
}

impl From<ModeArg> for SelectMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Single => SelectMode::Single,
            ModeArg::Multi => SelectMode::Multi,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    SimpleLogger::init(level, Config::default()).context("Không khởi tạo được logger")?;

    let data = std::fs::read_to_string(&args.input)
        .with_context(|| format!("Không đọc được file {:?}", args.input))?;
    let options = parse_option_payload(&data, &args.key)
        .with_context(|| format!("Payload {:?} không hợp lệ", args.input))?;
    let options = normalize_options(
        options,
        LabelStyle {
            sort: args.sort,
            capitalize: args.capitalize,
        },
    );

    let config = WidgetConfig {
        mode: args.mode.into(),
        max_results: args.max_results,
        ..WidgetConfig::default()
    };
    let mut widget = Autocomplete::with_options(config, options);

    if !args.query.is_empty() {
        widget.input(args.query.as_str());
    }

    for name in &args.keys {
        let key = parse_key(name)?;
        let outcome = widget.handle_key(key);
        log::debug!("phím {name}: handled={}", outcome.handled);
        if let Some(event) = outcome.event {
            println!("onSelect: {}", describe_event(&event));
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&widget.state())?);
        return Ok(());
    }

    println!(
        "Open: {}\nQuery: {:?}\nForm value: {:?}",
        widget.is_open(),
        widget.query(),
        widget.form_value()
    );
    if widget.is_open() {
        for row in widget.menu() {
            println!("{}", describe_row(&row));
        }
    }

    Ok(())
}

fn parse_key(name: &str) -> anyhow::Result<Key> {
    let key = match name.trim().to_ascii_lowercase().as_str() {
        "down" | "arrowdown" => Key::ArrowDown,
        "up" | "arrowup" => Key::ArrowUp,
        "enter" => Key::Enter,
        "esc" | "escape" => Key::Escape,
        other => bail!("Phím không hỗ trợ: {other}"),
    };
    Ok(key)
}

fn describe_event(event: &SelectionEvent) -> String {
    match event {
        SelectionEvent::Single(option) => option.label.clone(),
        SelectionEvent::Multi(options) => options
            .iter()
            .map(|option| option.label.as_str())
            .collect::<Vec<_>>()
            .join(", "),
    }
}

fn describe_row(row: &MenuRow) -> String {
    match row {
        MenuRow::Option {
            label,
            highlighted,
            selected,
            ..
        } => {
            let cursor = if *highlighted { '>' } else { ' ' };
            let mark = if *selected { "[x]" } else { "[ ]" };
            format!("{cursor} {mark} {label}")
        }
        MenuRow::Placeholder { label } => format!("  ({label})"),
    }
}
