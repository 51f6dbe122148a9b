//! Manager review of an employee: `review`, `accept`, `reject`.

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filter::ViewMode;
use crate::core::review::EmployeeReview;
use crate::core::routes::View;
use crate::core::workflow::Decision;
use crate::errors::AppResult;
use crate::models::UserId;
use crate::ui::messages::{error, header, info, warning};
use crate::ui::tables::days_table;

use super::{connect, open_storage, parse_day, require_session, resolve_range};

fn render(review: &EmployeeReview, details: bool, separator: &str) {
    header(format!(
        "Employee {}: {} days {}",
        review.employee(),
        review.mode(),
        review.range()
    ));
    match review.empty_message() {
        Some(msg) => info(msg),
        None => println!("{}", days_table(&review.visible(), details, separator)),
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Review {
        employee,
        period,
        mode,
        details,
    } = cmd
    {
        let storage = open_storage(cfg)?;
        let session = require_session(&storage)?;
        View::Employee(*employee).authorize(Some(&session))?;
        let range = resolve_range(period.as_deref())?;
        let api = connect(cfg)?;

        let review = EmployeeReview::load(&api, &session, *employee, range, *mode)?;
        render(&review, *details, &cfg.separator_char);
    }
    Ok(())
}

/// Arguments shared by `accept` and `reject`.
struct DecisionArgs<'a> {
    employee: UserId,
    dates: &'a [String],
    all: bool,
    period: Option<&'a str>,
    mode: ViewMode,
}

pub fn decide(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let (decision, args) = match cmd {
        Commands::Accept {
            employee,
            dates,
            all,
            period,
            mode,
        } => (
            Decision::Accept,
            DecisionArgs {
                employee: *employee,
                dates,
                all: *all,
                period: period.as_deref(),
                mode: *mode,
            },
        ),
        Commands::Reject {
            employee,
            dates,
            all,
            period,
            mode,
        } => (
            Decision::Reject,
            DecisionArgs {
                employee: *employee,
                dates,
                all: *all,
                period: period.as_deref(),
                mode: *mode,
            },
        ),
        _ => return Ok(()),
    };

    let storage = open_storage(cfg)?;
    let session = require_session(&storage)?;
    View::Employee(args.employee).authorize(Some(&session))?;
    let range = resolve_range(args.period)?;
    let api = connect(cfg)?;

    let mut review = EmployeeReview::load(&api, &session, args.employee, range, args.mode)?;

    if args.all {
        review.select_all();
    } else {
        for raw in args.dates {
            let day = parse_day(raw)?;
            if review.visible().iter().any(|d| d.day == day) {
                review.toggle(day);
            } else {
                warning(format!("{} is not among the {} days", day, review.mode()));
            }
        }
    }

    let selected = review.selected();
    if selected.is_empty() {
        match review.empty_message() {
            Some(msg) => info(msg),
            None => info("No days selected."),
        }
        return Ok(());
    }

    match review.decide(&api, &session, decision) {
        Ok(Some(n)) => {
            let list: Vec<String> = selected.iter().map(|d| d.to_string()).collect();
            storage.audit(
                decision.verb(),
                &format!("{}:{}", args.employee, list.join(",")),
                &decision.success_message(),
            );
            n.show();
            render(&review, false, &cfg.separator_char);
            Ok(())
        }
        Ok(None) => Ok(()),
        Err(e) => {
            error(decision.failure_message());
            Err(e)
        }
    }
}
