use crate::cli::context::OrderContext;
use crate::db::draft_repo;
use crate::model::{Category, OrderDraft};
use crate::ops::order_ops;
use crate::queries::{order_queries, roster_queries};
use crate::validation::trim_optional;

/// Roster listing with per-person status, grouped the way the ordering
/// page renders it: students first, then teachers.
pub fn list(ctx: &OrderContext) {
    if ctx.people.is_empty() {
        println!("No hay personas en la lista.");
        return;
    }

    println!(
        "Progreso: {} personas",
        order_queries::progress_label(&ctx.people, &ctx.drafts)
    );
    println!();

    for category in Category::ALL {
        let section = roster_queries::by_category(&ctx.people, *category);
        if section.is_empty() {
            continue;
        }

        println!("{}:", category.section_name());
        for person in section {
            let status = order_queries::order_status(&ctx.drafts, person.id);
            println!(
                "  [{}] {} - {}",
                status.marker(),
                person.name,
                status.display_name()
            );
        }
        println!();
    }

    if order_queries::all_orders_complete(&ctx.people, &ctx.drafts) {
        println!("Todos los pedidos listos. Usa 'continue' para ver el resumen.");
    }
}

/// The order-options flow for one person: three prompts, blank means the
/// component is skipped. Skipping all three records a no-meal draft.
pub fn order(ctx: &mut OrderContext, args: &str) {
    let person = match ctx.find_person(args) {
        Some(p) => p,
        None => return,
    };

    println!(
        "Pedido para {} ({})",
        person.name,
        person.category.display_name()
    );
    println!("Presiona Enter para omitir un componente.");

    let fruit_or_soup = match ctx.prompt("Fruta o sopa: ") {
        Some(s) => trim_optional(Some(&s)),
        None => return,
    };
    let juice_or_lemonade = match ctx.prompt("Jugo o limonada: ") {
        Some(s) => trim_optional(Some(&s)),
        None => return,
    };
    let main_dish = match ctx.prompt("Plato principal: ") {
        Some(s) => trim_optional(Some(&s)),
        None => return,
    };

    let draft = OrderDraft::new(person.id, fruit_or_soup, juice_or_lemonade, main_dish);
    let no_meal = draft.is_no_meal();
    order_ops::record_selection(&mut ctx.drafts, draft);

    if no_meal {
        println!("{}: sin almuerzo.", person.name);
    } else {
        println!("{}: pedido registrado.", person.name);
    }
}

/// Mark a person as explicitly not having lunch.
pub fn no_meal(ctx: &mut OrderContext, args: &str) {
    let person = match ctx.find_person(args) {
        Some(p) => p,
        None => return,
    };

    order_ops::record_no_meal(&mut ctx.drafts, person.id);
    println!("{}: sin almuerzo.", person.name);
}

/// Remove a person's draft.
pub fn reset(ctx: &mut OrderContext, args: &str) {
    let person = match ctx.find_person(args) {
        Some(p) => p,
        None => return,
    };

    if order_ops::remove_draft(&mut ctx.drafts, person.id) {
        println!("{}: pendiente.", person.name);
    } else {
        println!("{} no tiene pedido todavía.", person.name);
    }
}

pub fn progress(ctx: &OrderContext) {
    println!(
        "Progreso: {} personas",
        order_queries::progress_label(&ctx.people, &ctx.drafts)
    );
}

/// The continue action: only persists and shows the summary when every
/// person has a draft.
pub fn continue_to_summary(ctx: &mut OrderContext) {
    match order_ops::save_and_continue(&ctx.conn, &ctx.people, &ctx.drafts) {
        Ok(true) => {
            println!("Pedidos guardados.");
            println!();
            summary(ctx);
        }
        Ok(false) => {
            println!(
                "Faltan pedidos: {} personas.",
                order_queries::progress_label(&ctx.people, &ctx.drafts)
            );
        }
        Err(e) => ctx.print_error(&e),
    }
}

/// The order-summary view. Reachable only once the gate is open.
pub fn summary(ctx: &OrderContext) {
    if !order_queries::all_orders_complete(&ctx.people, &ctx.drafts) {
        println!("El resumen solo está disponible cuando todos tienen pedido.");
        return;
    }

    println!("Resumen del Pedido");
    println!("==================");
    for person in &ctx.people {
        match order_queries::find_draft(&ctx.drafts, person.id) {
            Some(draft) if draft.is_no_meal() => {
                println!("  {} - Sin almuerzo", person.name);
            }
            Some(draft) => {
                println!("  {}:", person.name);
                if let Some(v) = &draft.fruit_or_soup {
                    println!("    Fruta o sopa: {}", v);
                }
                if let Some(v) = &draft.juice_or_lemonade {
                    println!("    Jugo o limonada: {}", v);
                }
                if let Some(v) = &draft.main_dish {
                    println!("    Plato principal: {}", v);
                }
            }
            // unreachable when the gate is open, but harmless
            None => {
                println!("  {} - Pendiente", person.name);
            }
        }
    }
}

/// Discard every draft, in memory and in the store.
pub fn clear(ctx: &mut OrderContext) {
    ctx.drafts.clear();
    if let Err(e) = draft_repo::clear(&ctx.conn) {
        ctx.print_error(&e);
        return;
    }
    println!("Pedidos descartados.");
}
