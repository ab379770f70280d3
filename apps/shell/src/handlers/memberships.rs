use crate::models::args::MembershipAction;
use crate::services::render;
use anyhow::Result;
use chrono::NaiveDate;
use gymhub::GymHub;
use gymhub::features::memberships::MembershipFilter;
use gymhub::kernel::filter::apply_filter;
use gymhub::kernel::money::format_money;

pub async fn handle(hub: &GymHub, action: MembershipAction, today: NaiveDate) -> Result<()> {
    let catalog = hub.catalog();
    let assigned = hub.client_memberships();

    match action {
        MembershipAction::Types { active } => {
            let types = if active { catalog.active().await? } else { catalog.list().await? };
            render::membership_types(&types);
        },
        MembershipAction::Plans { active } => {
            let plans = if active { catalog.active_plans().await? } else { catalog.plans().await? };
            render::plans(&plans);
        },
        MembershipAction::Quote { membership, plan } => {
            let (membership, plan, quote) = catalog.quote(&membership, plan.as_deref()).await?;
            render::quote(&membership, plan.as_ref(), &quote);
        },
        MembershipAction::List { text, status, client, expiring } => {
            let mut filter = MembershipFilter::new(today).with_text(text.unwrap_or_default());
            if let Some(status) = status {
                filter = filter.with_status(status);
            }
            if let Some(folio) = client {
                filter = filter.for_client(folio);
            }
            if let Some(days) = expiring {
                filter = filter.expiring_within(days);
            }
            let records = assigned.list().await?;
            render::client_memberships(&apply_filter(&records, &filter), today);
        },
        MembershipAction::History { folio } => {
            render::client_memberships(&assigned.by_client(&folio).await?, today);
        },
        MembershipAction::Expiring { days } => {
            let window = days.unwrap_or(hub.config().memberships.expiring_window_days);
            render::client_memberships(&assigned.expiring(today, window).await?, today);
        },
        MembershipAction::Assign { folio, membership, plan, start, pay } => {
            let membership = catalog.get(&membership).await?;
            let plan = match plan {
                Some(id) => Some(catalog.plan(&id).await?),
                None => None,
            };
            let created =
                assigned.assign(&folio, &membership, plan.as_ref(), start.unwrap_or(today)).await?;
            println!(
                "✅ Assigned {} to {folio} until {} for {}",
                membership.nombre,
                created.fecha_fin,
                format_money(created.precio_final.unwrap_or_default())
            );
            if let Some(method) = pay {
                let payment = hub.payments().for_membership(&created, method, None).await?;
                println!("✅ Recorded payment {}", payment.folio);
            }
        },
        MembershipAction::Renew { id, plan } => {
            let current = assigned.get(&id).await?;
            let membership = catalog.get(current.id_membresia.as_str()).await?;
            let plan = match plan {
                Some(id) => Some(catalog.plan(&id).await?),
                None => None,
            };
            match assigned.renew(&current, &membership, plan.as_ref(), today).await? {
                Some(renewed) => {
                    println!("✅ Renewed until {}", renewed.fecha_fin);
                    render::client_membership(&renewed, today);
                },
                None => println!("Renewal cancelled."),
            }
        },
        MembershipAction::Cancel { id } => {
            let current = assigned.get(&id).await?;
            match assigned.cancel(&current, today).await? {
                Some(_) => println!("✅ Membership {id} cancelled"),
                None => println!("Nothing changed."),
            }
        },
    }
    Ok(())
}
