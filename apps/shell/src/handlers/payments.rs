use crate::models::args::{PaymentAction, ProductAction};
use crate::services::render;
use anyhow::Result;
use gymhub::GymHub;
use gymhub::domain::{CatalogStatus, Payment, PaymentStatus, Product};
use gymhub::features::payments::summary::{count_by_status, revenue_by_method};
use gymhub::features::payments::stock::low_stock;
use gymhub::features::payments::{PaymentFilter, ProductFilter};
use gymhub::kernel::filter::apply_filter;
use gymhub::kernel::money::format_money;

pub async fn handle_payments(hub: &GymHub, action: PaymentAction) -> Result<()> {
    let service = hub.payments();

    match action {
        PaymentAction::List { text, method, status, client, from, to } => {
            let filter = PaymentFilter {
                text: text.unwrap_or_default(),
                method,
                status,
                client_folio: client,
                from,
                to,
            };
            render::payments(&apply_filter(&service.list().await?, &filter));
        },
        PaymentAction::History { folio } => render::payments(&service.by_client(&folio).await?),
        PaymentAction::Record { client, amount, concept, method, reference } => {
            let payment = Payment {
                folio: String::new(),
                folio_cliente: client,
                id_cliente_membresia: None,
                monto: amount,
                metodo_pago: method,
                concepto: concept,
                referencia: reference,
                estatus: PaymentStatus::Completed,
                fecha_pago: None,
            };
            let recorded = service.record(payment).await?;
            println!("✅ Recorded payment {} for {}", recorded.folio, format_money(recorded.monto));
        },
        PaymentAction::Summary { from, to } => {
            let payments = service.list().await?;
            let in_range =
                apply_filter(&payments, &PaymentFilter { from, to, ..PaymentFilter::default() });
            let by_method = revenue_by_method(&in_range);
            let total: f64 = by_method.iter().map(|(_, amount)| amount).sum();
            println!("Revenue {}", format_money(total));
            for (method, amount) in by_method {
                println!("  {method:<14} {:>12}", format_money(amount));
            }
            for (status, count) in count_by_status(&in_range) {
                println!("  {status:<14} {count:>12}");
            }
        },
        PaymentAction::Delete { folio } => {
            service.delete(&folio).await?;
            println!("✅ Deleted payment {folio}");
        },
    }
    Ok(())
}

pub async fn handle_products(hub: &GymHub, action: ProductAction) -> Result<()> {
    let service = hub.products();

    match action {
        ProductAction::List { text, category, in_stock, low_stock } => {
            let filter = ProductFilter {
                text: text.unwrap_or_default(),
                category,
                in_stock_only: in_stock,
                low_stock_only: low_stock,
            };
            render::products(&apply_filter(&service.list().await?, &filter));
        },
        ProductAction::Search { term } => render::products(&service.search(&term).await?),
        ProductAction::Create { nombre, precio, stock, stock_minimo, categoria, descripcion } => {
            let product = Product {
                id: None,
                nombre,
                descripcion,
                categoria,
                precio,
                stock,
                stock_minimo,
                estatus: CatalogStatus::Active,
            };
            let created = service.create(&product).await?;
            println!("✅ Created product {}", created.nombre);
        },
        ProductAction::AdjustStock { id, delta } => {
            let updated = service.adjust_stock(&id, delta).await?;
            println!("✅ {} now has {} in stock", updated.nombre, updated.stock);
        },
        ProductAction::LowStock => {
            let products = service.list().await?;
            render::products(&low_stock(&products));
        },
        ProductAction::Delete { id } => {
            service.delete(&id).await?;
            println!("✅ Deleted product {id}");
        },
    }
    Ok(())
}
