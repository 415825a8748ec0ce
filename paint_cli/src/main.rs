//! # Brushline CLI Application
//!
//! Terminal front end for room painting estimates. Prompts for the same
//! fields as the web form (defaults in brackets), prints the estimate,
//! then the JSON form of the result for scripted use.

use std::collections::HashMap;
use std::io::{self, BufRead, Write};

use paint_core::{calculate, CustomerInfo, EstimateRequest, EstimateResult, SystemClock};

/// Prompt for one field. Empty input (or a broken stdin) yields the default.
fn prompt_field(prompt: &str, default: &str) -> String {
    if default.is_empty() {
        print!("{}: ", prompt);
    } else {
        print!("{} [{}]: ", prompt, default);
    }
    if io::stdout().flush().is_err() {
        return default.to_string();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default.to_string();
    }

    let input = input.trim();
    if input.is_empty() {
        default.to_string()
    } else {
        input.to_string()
    }
}

fn main() {
    println!("Brushline CLI - Painting Estimator");
    println!("==================================");
    println!();

    let prompts = [
        ("customer_name", "Customer name", "Customer"),
        ("customer_email", "Email", ""),
        ("customer_phone", "Phone", ""),
        ("job_address", "Job address", ""),
        ("length", "Room length (ft)", "12"),
        ("width", "Room width (ft)", "10"),
        ("height", "Wall height (ft)", "8"),
        ("doors", "Doors", "1"),
        ("windows", "Windows", "2"),
        ("condition", "Condition (excellent/good/fair/poor)", "good"),
        ("paint_quality", "Paint quality (basic/premium/luxury)", "basic"),
        ("coats", "Coats", "2"),
    ];

    let fields: HashMap<String, String> = prompts
        .iter()
        .map(|(key, prompt, default)| (key.to_string(), prompt_field(prompt, default)))
        .collect();

    println!();

    let priced = EstimateRequest::from_fields(&fields)
        .and_then(|request| calculate(&request.input, &SystemClock).map(|result| (request, result)));

    match priced {
        Ok((request, result)) => {
            print_estimate(&result, &request.customer);

            println!();
            println!("JSON Output (for API use):");
            if let Ok(json) = serde_json::to_string_pretty(&result) {
                println!("{}", json);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            std::process::exit(1);
        }
    }
}

fn print_estimate(result: &EstimateResult, customer: &CustomerInfo) {
    let room = &result.room_info;
    let job = &result.job_details;

    println!("═══════════════════════════════════════");
    println!("  PAINTING ESTIMATE  {}", job.date);
    println!("═══════════════════════════════════════");
    println!();
    println!("Customer: {}", customer.name);
    for line in [&customer.email, &customer.phone, &customer.address] {
        if !line.is_empty() {
            println!("          {}", line);
        }
    }
    println!();
    println!("Room:");
    println!("  Size:        {} x {} x {} ft", room.length, room.width, room.height);
    println!("  Openings:    {} door(s), {} window(s)", room.doors, room.windows);
    println!("  Wall area:   {:.1} sq ft", room.wall_area);
    println!("  Paintable:   {:.1} sq ft", room.paintable_area);
    println!();
    println!("Job:");
    println!("  Condition:   {}", job.condition);
    println!("  Paint:       {}", job.paint_quality);
    println!("  Coats:       {}", job.coats);
    println!();
    println!("Materials:");
    println!("  Paint:       {} gal  ${:.2}", result.materials.gallons_needed, result.materials.paint_cost);
    println!("  Supplies:    ${:.2}", result.materials.supplies_cost);
    println!("  Total:       ${:.2}", result.materials.materials_total);
    println!();
    println!("Labor:");
    println!("  Hours:       {:.1}", result.labor.hours);
    println!("  Cost:        ${:.2}", result.labor.labor_cost);
    println!();
    println!("═══════════════════════════════════════");
    println!("  Subtotal:    ${:.2}", result.totals.subtotal);
    println!("  Markup:      ${:.2}", result.totals.markup);
    println!("  TOTAL:       ${:.2}", result.totals.total);
    println!("═══════════════════════════════════════");
}
