//! Server-rendered HTML pages
//!
//! Two pages: the estimate request form and the finished estimate. Every
//! user-supplied string goes through [`escape`] before it reaches markup.

use std::collections::HashMap;

use paint_core::{CustomerInfo, EstimateError, EstimateResult, PaintQuality, SurfaceCondition};

/// Estimate request form.
///
/// `values` pre-fills the inputs (used when a submission is rejected);
/// `error` is shown above the form.
pub fn form_page(values: &HashMap<String, String>, error: Option<&EstimateError>) -> String {
    let value = |key: &str| escape(values.get(key).map(String::as_str).unwrap_or(""));
    let selected_condition = values.get("condition").map(String::as_str).unwrap_or("good");
    let selected_quality = values.get("paint_quality").map(String::as_str).unwrap_or("basic");

    let condition_options: String = SurfaceCondition::ALL
        .iter()
        .map(|c| option(c.code(), c.display_name(), c.code().eq_ignore_ascii_case(selected_condition.trim())))
        .collect();
    let quality_options: String = PaintQuality::ALL
        .iter()
        .map(|q| option(q.code(), q.display_name(), q.code().eq_ignore_ascii_case(selected_quality.trim())))
        .collect();

    let error_html = match error {
        Some(e) => format!(r#"<div class="error" role="alert">{}</div>"#, escape(&e.to_string())),
        None => String::new(),
    };

    let coats = values.get("coats").map(|v| escape(v)).unwrap_or_else(|| "2".to_string());
    let doors = values.get("doors").map(|v| escape(v)).unwrap_or_else(|| "0".to_string());
    let windows = values.get("windows").map(|v| escape(v)).unwrap_or_else(|| "0".to_string());

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Painting Estimate</title>
    <style>
{css}
    </style>
</head>
<body>
    <header>
        <h1>Painting Estimate</h1>
    </header>

    <main>
        {error_html}
        <form method="post" action="/">
            <section>
                <h2>Customer</h2>
                <label>Name <input type="text" name="customer_name" value="{customer_name}"></label>
                <label>Email <input type="email" name="customer_email" value="{customer_email}"></label>
                <label>Phone <input type="tel" name="customer_phone" value="{customer_phone}"></label>
                <label>Job address <input type="text" name="job_address" value="{job_address}"></label>
            </section>

            <section>
                <h2>Room</h2>
                <label>Length (ft) <input type="number" step="0.1" min="0" name="length" value="{length}" required></label>
                <label>Width (ft) <input type="number" step="0.1" min="0" name="width" value="{width}" required></label>
                <label>Height (ft) <input type="number" step="0.1" min="0" name="height" value="{height}" required></label>
                <label>Doors <input type="number" min="0" name="doors" value="{doors}"></label>
                <label>Windows <input type="number" min="0" name="windows" value="{windows}"></label>
            </section>

            <section>
                <h2>Job</h2>
                <label>Surface condition <select name="condition">{condition_options}</select></label>
                <label>Paint quality <select name="paint_quality">{quality_options}</select></label>
                <label>Coats <input type="number" min="1" name="coats" value="{coats}"></label>
            </section>

            <button type="submit" class="primary">Get Estimate</button>
        </form>
    </main>
</body>
</html>"#,
        css = CSS,
        error_html = error_html,
        customer_name = value("customer_name"),
        customer_email = value("customer_email"),
        customer_phone = value("customer_phone"),
        job_address = value("job_address"),
        length = value("length"),
        width = value("width"),
        height = value("height"),
        doors = doors,
        windows = windows,
        condition_options = condition_options,
        quality_options = quality_options,
        coats = coats,
    )
}

/// Finished estimate for a customer
pub fn estimate_page(estimate: &EstimateResult, customer: &CustomerInfo) -> String {
    let room = &estimate.room_info;
    let materials = &estimate.materials;
    let labor = &estimate.labor;
    let totals = &estimate.totals;
    let job = &estimate.job_details;

    let json = serde_json::to_string_pretty(estimate).unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Estimate for {name}</title>
    <style>
{css}
    </style>
</head>
<body>
    <header>
        <h1>Painting Estimate</h1>
        <div class="date">{date}</div>
    </header>

    <main>
        <section class="customer">
            <h2>Prepared for</h2>
            <p class="name">{name}</p>
            <p>{email}</p>
            <p>{phone}</p>
            <p>{address}</p>
        </section>

        <section>
            <h2>Room</h2>
            <table>
                <tr><th>Dimensions</th><td>{length} ft &times; {width} ft &times; {height} ft</td></tr>
                <tr><th>Doors</th><td>{doors}</td></tr>
                <tr><th>Windows</th><td>{windows}</td></tr>
                <tr><th>Wall area</th><td>{wall_area:.1} sq ft</td></tr>
                <tr><th>Paintable area</th><td>{paintable_area:.1} sq ft</td></tr>
            </table>
        </section>

        <section>
            <h2>Job</h2>
            <table>
                <tr><th>Surface condition</th><td>{condition}</td></tr>
                <tr><th>Paint quality</th><td>{paint_quality}</td></tr>
                <tr><th>Coats</th><td>{coats}</td></tr>
            </table>
        </section>

        <section>
            <h2>Materials</h2>
            <table>
                <tr><th>Paint ({gallons} gal)</th><td>{paint_cost}</td></tr>
                <tr><th>Supplies</th><td>{supplies_cost}</td></tr>
                <tr class="sum"><th>Materials total</th><td>{materials_total}</td></tr>
            </table>
        </section>

        <section>
            <h2>Labor</h2>
            <table>
                <tr><th>Estimated hours</th><td>{hours:.1}</td></tr>
                <tr class="sum"><th>Labor</th><td>{labor_cost}</td></tr>
            </table>
        </section>

        <section class="totals">
            <h2>Total</h2>
            <table>
                <tr><th>Subtotal</th><td>{subtotal}</td></tr>
                <tr><th>Markup</th><td>{markup}</td></tr>
                <tr class="sum"><th>Total</th><td>{total}</td></tr>
            </table>
        </section>

        <details>
            <summary>JSON</summary>
            <pre>{json}</pre>
        </details>

        <p><a href="/">New estimate</a></p>
    </main>
</body>
</html>"#,
        css = CSS,
        date = escape(&job.date),
        name = escape(&customer.name),
        email = escape(&customer.email),
        phone = escape(&customer.phone),
        address = escape(&customer.address),
        length = room.length,
        width = room.width,
        height = room.height,
        doors = room.doors,
        windows = room.windows,
        wall_area = room.wall_area,
        paintable_area = room.paintable_area,
        condition = job.condition,
        paint_quality = job.paint_quality,
        coats = job.coats,
        gallons = materials.gallons_needed,
        paint_cost = money(materials.paint_cost),
        supplies_cost = money(materials.supplies_cost),
        materials_total = money(materials.materials_total),
        hours = labor.hours,
        labor_cost = money(labor.labor_cost),
        subtotal = money(totals.subtotal),
        markup = money(totals.markup),
        total = money(totals.total),
        json = escape(&json),
    )
}

fn option(code: &str, label: &str, selected: bool) -> String {
    let selected = if selected { " selected" } else { "" };
    format!(r#"<option value="{code}"{selected}>{label}</option>"#)
}

/// Escape text for use in HTML content and quoted attributes
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Dollar amount with thousands separators, e.g. "$1,127.28"
pub fn money(amount: f64) -> String {
    let formatted = format!("{:.2}", amount.abs());
    let (whole, cents) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}${grouped}.{cents}")
}

const CSS: &str = r#"
        body { font-family: system-ui, sans-serif; margin: 0; background: #f6f5f2; color: #222; }
        header { background: #2f4858; color: #fff; padding: 1rem 2rem; display: flex; justify-content: space-between; align-items: baseline; }
        main { max-width: 40rem; margin: 1.5rem auto; padding: 0 1rem; }
        section { background: #fff; border-radius: 6px; padding: 1rem 1.25rem; margin-bottom: 1rem; }
        h2 { font-size: 1rem; margin: 0 0 0.75rem; color: #2f4858; }
        label { display: block; margin-bottom: 0.5rem; }
        input, select { display: block; width: 100%; padding: 0.35rem; box-sizing: border-box; }
        button.primary { background: #33658a; color: #fff; border: 0; padding: 0.6rem 1.4rem; border-radius: 4px; }
        table { width: 100%; border-collapse: collapse; }
        th { text-align: left; font-weight: normal; padding: 0.25rem 0; }
        td { text-align: right; }
        tr.sum th, tr.sum td { font-weight: bold; border-top: 1px solid #ccc; }
        .totals tr.sum td { font-size: 1.25rem; }
        .error { background: #fde8e8; border: 1px solid #e0a0a0; padding: 0.75rem; border-radius: 4px; margin-bottom: 1rem; }
        .customer p { margin: 0.15rem 0; }
        .customer .name { font-weight: bold; }
        pre { overflow-x: auto; font-size: 0.8rem; }
"#;
