//! Human-readable run summaries.

use fontdecl_core::{CheckReport, GenerationReport, SkippedFamily};

pub fn print_generation(report: &GenerationReport) {
    let size_kb = report.bytes as f64 / 1024.0;
    if report.changed {
        println!(
            "Generated {} ({} families, {size_kb:.1} KB)",
            report.output.display(),
            report.emitted
        );
    } else {
        println!("{} is up to date ({} families)", report.output.display(), report.emitted);
    }
    print_skipped(&report.skipped);
}

pub fn print_check(report: &CheckReport) {
    println!(
        "Checked {} families: {} valid, {} invalid",
        report.families,
        report.valid,
        report.skipped.len()
    );
    print_skipped(&report.skipped);
}

fn print_skipped(skipped: &[SkippedFamily]) {
    if skipped.is_empty() {
        return;
    }
    println!("\nSkipped families");
    for SkippedFamily { family, reason } in skipped {
        println!("  {family}: {reason}");
    }
}
