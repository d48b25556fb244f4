//! Human-facing rendering of scope plans and rsync argument vectors.
//! Info notices go to stdout, warnings to stderr; styling is applied only
//! when the stream is a terminal.

use is_terminal::IsTerminal;
use owo_colors::OwoColorize;

use dsync_types::{Notice, NoticeLevel, Scope, ScopeResolution};

pub fn print_scope_plan(command: &str, mode: &str, name: &str, res: &ScopeResolution) {
    let header = format!("{} ({mode} {name})", command.to_uppercase());
    if std::io::stdout().is_terminal() {
        println!("{}", header.bold());
    } else {
        println!("{header}");
    }

    println!("Scope source: {}", res.source);
    if res.batch {
        println!("Scopes: {}", res.scopes.len());
    } else if res.full_root {
        println!("Scope: <full-root>");
    } else if let Some(scope) = res.scopes.first() {
        println!("Scope: {}", scope.as_str());
    }

    for notice in &res.notices {
        print_notice(notice);
    }
}

pub fn print_notice(notice: &Notice) {
    match notice.level {
        NoticeLevel::Info => {
            if std::io::stdout().is_terminal() {
                println!("{}: {}", "info".cyan(), notice.message);
            } else {
                println!("info: {}", notice.message);
            }
            for hint in &notice.hints {
                println!("{hint}");
            }
        }
        NoticeLevel::Warn => {
            if std::io::stderr().is_terminal() {
                eprintln!("{}: {}", "warn".yellow(), notice.message);
            } else {
                eprintln!("warn: {}", notice.message);
            }
            for hint in &notice.hints {
                eprintln!("{hint}");
            }
        }
    }
}

pub fn print_rsync_plan(scope: &Scope, src: &str, dst: &str, preview: &[String], apply: &[String]) {
    println!("Rsync plan ({}):", scope.label());
    println!("  SRC : {src}");
    println!("  DEST: {dst}");
    println!("  Preview argv:");
    println!("    rsync {}", preview.join(" "));
    println!("  Apply argv:");
    println!("    rsync {}", apply.join(" "));
}
