use chrono::{DateTime, Utc};
use colored::Colorize;
use guias::commands::{CmdMessage, MessageLevel};
use guias::media;
use guias::model::Tutorial;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_tutorials(records: &[Tutorial]) {
    if records.is_empty() {
        println!("No tutorials found.");
        return;
    }

    for (i, record) in records.iter().enumerate() {
        let idx_str = format!("{}. ", i + 1);
        let category = format!("[{}]", record.category.label());

        let mut line = format!("{} {}", record.title, category.as_str());
        if !record.tags.is_empty() {
            let tags: Vec<String> = record.tags.iter().map(|t| format!("#{}", t)).collect();
            line.push(' ');
            line.push_str(&tags.join(" "));
        }

        let time_ago = format_time_ago(record.created_at);
        let fixed_width = 4 + idx_str.width() + 2 + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);

        let display = truncate_to_width(&line, available);
        let padding = available.saturating_sub(display.width());

        println!(
            "    {}{}{}  {}",
            idx_str,
            display,
            " ".repeat(padding),
            time_ago.dimmed()
        );
    }
}

pub(super) fn print_detail(record: &Tutorial) {
    println!("{}", record.title.bold());
    println!("--------------------------------");
    println!("{}", record.description);
    println!();
    println!("Category: {}", record.category.label());
    if record.tags.is_empty() {
        println!("Tags:     (none)");
    } else {
        println!("Tags:     {}", record.tags.join(", "));
    }
    if let Some(video) = &record.video_url {
        println!("Video:    {}", video);
    }
    if let Some(pdf) = &record.pdf_url {
        println!("PDF:      {}", pdf);
    }
    match media::display_image(record) {
        Some(image) => println!("Image:    {}", image),
        None => println!("Image:    (none)"),
    }
    println!(
        "Created:  {}",
        record.created_at.format("%Y-%m-%d %H:%M UTC")
    );
    if let Some(updated) = record.updated_at {
        println!("Updated:  {}", updated.format("%Y-%m-%d %H:%M UTC"));
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(timestamp);

    let formatter = Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());

    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
