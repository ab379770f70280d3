//! Plain-text tables for stdout.

use chrono::NaiveDate;
use gymhub::domain::{
    Activity, ClientMembership, Membership, Payment, PaymentPlan, Person, Product, Routine,
    UserProfile,
};
use gymhub::features::dashboard::DashboardStats;
use gymhub::features::memberships::Quote;
use gymhub::features::memberships::lifecycle::{days_remaining, effective_status};
use gymhub::features::memberships::pricing::{discount_percent, format_duration, months_covered};
use gymhub::features::payments::stock::is_low_stock;
use gymhub::features::training::activity::{available_spots, schedule_label};
use gymhub::features::training::routine::total_sets;
use gymhub::kernel::money::format_money;

const NONE: &str = "-";

fn or_dash(value: Option<&str>) -> &str {
    value.filter(|v| !v.trim().is_empty()).unwrap_or(NONE)
}

fn empty(title: &str) {
    println!("ℹ️ No {title} found.");
}

pub fn people<P: Person>(title: &str, records: &[P]) {
    if records.is_empty() {
        return empty(title);
    }
    println!("{:<8} {:<32} {:<28} {:<12} {:<9}", "Folio", "Name", "E-mail", "Phone", "Status");
    println!("{:-<93}", "");
    for p in records {
        println!(
            "{:<8} {:<32} {:<28} {:<12} {:<9}",
            p.folio(),
            p.full_name(),
            or_dash(p.email()),
            or_dash(p.phone()),
            p.status()
        );
    }
    println!("\n{} {title}", records.len());
}

pub fn person<P: Person>(record: &P) {
    println!("Folio:   {}", record.folio());
    println!("Name:    {}", record.full_name());
    println!("E-mail:  {}", or_dash(record.email()));
    println!("Phone:   {}", or_dash(record.phone()));
    println!("Status:  {}", record.status());
}

pub fn membership_types(records: &[Membership]) {
    if records.is_empty() {
        return empty("membership types");
    }
    println!("{:<6} {:<24} {:>12} {:<10} {:<9}", "Id", "Name", "Price", "Duration", "Status");
    println!("{:-<65}", "");
    for m in records {
        println!(
            "{:<6} {:<24} {:>12} {:<10} {:<9}",
            m.id.as_ref().map_or(NONE, |id| id.as_str()),
            m.nombre,
            format_money(m.precio),
            format_duration(months_covered(m.duracion_dias)),
            m.estatus
        );
    }
}

pub fn plans(records: &[PaymentPlan]) {
    if records.is_empty() {
        return empty("payment plans");
    }
    println!("{:<6} {:<24} {:>9} {:<10} {:<9}", "Id", "Name", "Discount", "Duration", "Status");
    println!("{:-<62}", "");
    for p in records {
        println!(
            "{:<6} {:<24} {:>8}% {:<10} {:<9}",
            p.id.as_ref().map_or(NONE, |id| id.as_str()),
            p.nombre,
            discount_percent(p),
            format_duration(months_covered(p.duracion_dias)),
            p.estatus
        );
    }
}

pub fn quote(membership: &Membership, plan: Option<&PaymentPlan>, quote: &Quote) {
    println!("Membership: {}", membership.nombre);
    println!("Plan:       {}", plan.map_or("none", |p| p.nombre.as_str()));
    println!("Base:       {} / month", format_money(quote.base));
    println!("Total:      {quote}");
}

pub fn client_memberships(records: &[ClientMembership], today: NaiveDate) {
    if records.is_empty() {
        return empty("memberships");
    }
    println!(
        "{:<6} {:<8} {:<20} {:<10} {:<10} {:>5} {:>12} {:<10}",
        "Id", "Client", "Membership", "Start", "End", "Days", "Price", "Status"
    );
    println!("{:-<90}", "");
    for m in records {
        println!(
            "{:<6} {:<8} {:<20} {:<10} {:<10} {:>5} {:>12} {:<10}",
            m.id.as_ref().map_or(NONE, |id| id.as_str()),
            m.folio_cliente,
            or_dash(m.nombre_membresia.as_deref()),
            m.fecha_inicio,
            m.fecha_fin,
            days_remaining(m, today),
            m.precio_final.map_or_else(|| NONE.to_owned(), format_money),
            effective_status(m, today)
        );
    }
}

pub fn client_membership(record: &ClientMembership, today: NaiveDate) {
    client_memberships(std::slice::from_ref(record), today);
}

pub fn payments(records: &[Payment]) {
    if records.is_empty() {
        return empty("payments");
    }
    println!(
        "{:<8} {:<8} {:>12} {:<14} {:<28} {:<11} {:<16}",
        "Folio", "Client", "Amount", "Method", "Concept", "Status", "Date"
    );
    println!("{:-<101}", "");
    for p in records {
        println!(
            "{:<8} {:<8} {:>12} {:<14} {:<28} {:<11} {:<16}",
            p.folio,
            p.folio_cliente,
            format_money(p.monto),
            p.metodo_pago,
            p.concepto,
            p.estatus,
            p.fecha_pago.map_or_else(|| NONE.to_owned(), |d| d.format("%Y-%m-%d %H:%M").to_string())
        );
    }
}

pub fn products(records: &[Product]) {
    if records.is_empty() {
        return empty("products");
    }
    println!("{:<6} {:<24} {:<14} {:>10} {:>6} {:<9}", "Id", "Name", "Category", "Price", "Stock", "Status");
    println!("{:-<74}", "");
    for p in records {
        let alert = if is_low_stock(p) { " ⚠" } else { "" };
        println!(
            "{:<6} {:<24} {:<14} {:>10} {:>6} {:<9}{alert}",
            p.id.as_ref().map_or(NONE, |id| id.as_str()),
            p.nombre,
            or_dash(p.categoria.as_deref()),
            format_money(p.precio),
            p.stock,
            p.estatus
        );
    }
}

pub fn activities(records: &[Activity]) {
    if records.is_empty() {
        return empty("activities");
    }
    println!(
        "{:<6} {:<20} {:<10} {:<12} {:<10} {:>9} {:>6} {:<9}",
        "Id", "Name", "Day", "Schedule", "Instructor", "Enrolled", "Free", "Status"
    );
    println!("{:-<89}", "");
    for a in records {
        println!(
            "{:<6} {:<20} {:<10} {:<12} {:<10} {:>9} {:>6} {:<9}",
            a.id.as_ref().map_or(NONE, |id| id.as_str()),
            a.nombre,
            or_dash(a.dia_semana.as_deref()),
            schedule_label(a),
            or_dash(a.folio_instructor.as_deref()),
            format!("{}/{}", a.inscritos, a.cupo_maximo),
            available_spots(a),
            a.estatus
        );
    }
}

pub fn routines(records: &[Routine]) {
    if records.is_empty() {
        return empty("routines");
    }
    println!("{:<6} {:<24} {:<13} {:<10} {:>9} {:<9}", "Id", "Name", "Level", "Instructor", "Exercises", "Status");
    println!("{:-<76}", "");
    for r in records {
        println!(
            "{:<6} {:<24} {:<13} {:<10} {:>9} {:<9}",
            r.id.as_ref().map_or(NONE, |id| id.as_str()),
            r.nombre,
            r.nivel,
            or_dash(r.folio_instructor.as_deref()),
            r.ejercicios.len(),
            r.estatus
        );
    }
}

pub fn routine(record: &Routine) {
    println!("{} ({})", record.nombre, record.nivel);
    if let Some(goal) = record.objetivo.as_deref() {
        println!("Goal: {goal}");
    }
    println!();
    for (n, e) in record.ejercicios.iter().enumerate() {
        println!(
            "{:>2}. {:<24} {:>2} x {:<3} {:<14} rest {}",
            n + 1,
            e.nombre,
            e.series,
            e.repeticiones,
            or_dash(e.grupo_muscular.as_deref()),
            e.descanso_segundos.map_or_else(|| NONE.to_owned(), |s| format!("{s}s"))
        );
    }
    println!("\n{} sets in total", total_sets(record));
}

pub fn profile(profile: &UserProfile) {
    println!("✅ Signed in as {} ({}), role {}", profile.nombre, profile.usuario, profile.rol);
}

pub fn dashboard(stats: &DashboardStats) {
    println!("\nDashboard {}\n", stats.today);
    println!(
        "Clients       {} total, {} active ({}%)",
        stats.total_clients, stats.active_clients, stats.active_client_percent
    );
    println!(
        "Memberships   {} active, {} expiring soon",
        stats.active_memberships, stats.expiring_memberships
    );
    let by_status: Vec<String> =
        stats.memberships_by_status.iter().map(|(status, n)| format!("{status} {n}")).collect();
    println!("              {}", by_status.join(", "));
    println!(
        "Revenue       {} today, {} this month",
        format_money(stats.revenue_today),
        format_money(stats.revenue_month)
    );
    let by_method: Vec<String> = stats
        .revenue_by_method
        .iter()
        .map(|(method, total)| format!("{method} {}", format_money(*total)))
        .collect();
    println!("              {}", by_method.join(", "));
    println!(
        "Classes       {}% average occupancy, {} full",
        stats.average_occupancy, stats.full_activities
    );
    if stats.low_stock.is_empty() {
        println!("Stock         no alerts");
    } else {
        println!("Stock         {} product(s) running low:", stats.low_stock.len());
        for p in &stats.low_stock {
            println!("              {} ({} left)", p.nombre, p.stock);
        }
    }
    println!();
}
