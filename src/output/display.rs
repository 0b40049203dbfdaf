//! Display functions for command results

use super::formatters::{
    colored_guess, create_progress_bar, feedback_to_emoji, format_duration, format_opening,
};
use crate::commands::SimulationStatistics;
use crate::core::{Feedback, Word};
use crate::search::OpeningReport;
use crate::solver::GameRecord;
use colored::Colorize;

/// One turn: coloured guess, emoji feedback, and the candidates left
pub fn print_assist_turn(guess: &Word, feedback: &Feedback, words_left: usize) {
    println!(
        "  {} {}  {} words left",
        colored_guess(guess, feedback),
        feedback_to_emoji(feedback),
        words_left
    );
}

/// Print a played game turn by turn
pub fn print_game_record(record: &GameRecord, strategy: &str) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {} ({strategy})",
        record.solution.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, turn) in record.turns.iter().enumerate() {
        print!("{:>3}.", i + 1);
        print_assist_turn(&turn.guess, &turn.feedback, turn.words_left);
    }

    println!(
        "\n{}",
        format!("✅ Solved in {} guesses!", record.guess_count())
            .green()
            .bold()
    );
}

/// Print simulation statistics
pub fn print_simulation_statistics(stats: &SimulationStatistics, strategy: &str) {
    println!("\n{}", "═".repeat(70));
    println!(" Simulation Results ({strategy}) ");
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    if let Some(opening) = &stats.opening {
        println!("  Opening:             {}", opening.text().to_uppercase());
    }
    println!("  Total words tested:  {}", stats.total_words);
    if stats.total_words == 0 {
        return;
    }
    println!(
        "  Successfully solved: {} {}",
        stats.solved,
        format!(
            "({:.1}%)",
            stats.solved as f64 / stats.total_words as f64 * 100.0
        )
        .green()
    );
    if !stats.failures.is_empty() {
        println!(
            "  Failed to solve:     {} {}",
            stats.failures.len(),
            format!(
                "({:.1}%)",
                stats.failures.len() as f64 / stats.total_words as f64 * 100.0
            )
            .red()
        );
        for (word, error) in stats.failures.iter().take(10) {
            println!("    {}: {error}", word.text().to_uppercase().red());
        }
    }
    println!(
        "  Average guesses:     {}",
        format!("{:.3}", stats.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "  Best / worst:        {} / {}",
        stats.min_guesses, stats.max_guesses
    );
    println!(
        "  Total time:          {}",
        format_duration(stats.total_time)
    );
    println!(
        "  Time per word:       {:.1}ms",
        stats.total_time.as_millis() as f64 / stats.total_words as f64
    );

    if stats.solved > 0 {
        println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
        let max_count = stats.guess_distribution.values().copied().max().unwrap_or(1);
        for guesses in stats.min_guesses..=stats.max_guesses {
            let count = stats.guess_distribution.get(&guesses).copied().unwrap_or(0);
            let percentage = count as f64 / stats.solved as f64 * 100.0;
            let bar = create_progress_bar(count as f64, max_count as f64, 40);
            println!(
                "  {guesses:2} guesses: {} {count:5} ({percentage:5.1}%)",
                bar.green()
            );
        }
    }

    let frequent = stats.most_frequent_guesses();
    if !frequent.is_empty() {
        println!("\n🎯 {}", "Most Frequent Guess per Turn".bright_cyan().bold());
        for (turn, (word, count)) in frequent.iter().enumerate() {
            println!(
                "  Turn {:2}: {} ({count} times)",
                turn + 1,
                word.text().to_uppercase().bright_white().bold()
            );
        }
    }

    if !stats.worst_words.is_empty() {
        println!("\n😰 {}", "Hardest Words".yellow().bold());
        for (word, guesses) in stats.worst_words.iter().take(5) {
            println!("  {} ({guesses} guesses)", word.text().to_uppercase().yellow());
        }
    }
}

/// Print the result of an opening search
pub fn print_search_report(report: &OpeningReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "BEST OPENING FOR".bright_cyan().bold(),
        report.seed.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n  Opening:          {}",
        format_opening(&report.opening()).bright_green().bold()
    );
    println!(
        "  Words left:       {}",
        format!("{:.3}", report.average_words_left)
            .bright_yellow()
            .bold()
    );
    println!("  Solutions tried:  {}", report.solutions_tried);
    println!("  Succeeded:        {}", report.succeeded);
    if !report.failures.is_empty() {
        println!(
            "  Failed:           {}",
            report.failures.len().to_string().red()
        );
        for failure in &report.failures {
            println!(
                "    {}: {}",
                failure.solution.text().to_uppercase().red(),
                failure.error
            );
        }
    }
    println!("  Elapsed:          {}", format_duration(report.elapsed));
    println!(
        "  Per solution:     {}",
        format_duration(report.time_per_solution())
    );
}
