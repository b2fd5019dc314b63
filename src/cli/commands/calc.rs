use crate::api::client::ApiClient;
use crate::api::service::HttpService;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::form::WorkingHoursCalculator;
use crate::core::service::{LocalService, WorkingHoursService};
use crate::errors::{AppError, AppResult};
use crate::models::response::WorkingHoursResponse;
use crate::ui::messages::header;
use crate::utils::colors::{colorize_optional, colorize_total};
use crate::utils::date::parse_date;
use crate::utils::table::{Column, Table};
use crate::utils::time::check_hour;
use crate::utils::{hours2readable, mins2readable};

/// Calculate working hours for the given range and print the result.
pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calc {
        start_date,
        start_time,
        end_date,
        end_time,
        quick,
        work_start,
        work_end,
        lunch_start,
        lunch_end,
        deduct_lunch,
        defaults,
        holidays,
        offline,
        json,
        advanced,
    } = cmd
    {
        //
        // 1. Form initialised from configuration
        //
        let mut calc = WorkingHoursCalculator::new(cfg.timezone, cfg.window());
        if *defaults {
            calc.reset_to_defaults();
        }

        //
        // 2. Date range (quick range or explicit fields)
        //
        if let Some(days) = quick {
            calc.set_quick_range(*days);
        } else {
            let sd = start_date.clone().unwrap_or_else(|| calc.start_date().to_string());
            let st = start_time.clone().unwrap_or_else(|| calc.start_time().to_string());
            let ed = end_date.clone().unwrap_or_else(|| calc.end_date().to_string());
            let et = end_time.clone().unwrap_or_else(|| calc.end_time().to_string());
            calc.set_start(sd, st);
            calc.set_end(ed, et);
        }

        //
        // 3. Working window overrides
        //
        let w = *calc.window();
        calc.set_work_hours(
            override_hour(*work_start, w.work_start_hour)?,
            override_hour(*work_end, w.work_end_hour)?,
        );
        calc.set_lunch_hours(
            override_hour(*lunch_start, w.lunch_start_hour)?,
            override_hour(*lunch_end, w.lunch_end_hour)?,
        );
        if *deduct_lunch {
            calc.set_deduct_lunch(true);
        }

        //
        // 4. Holidays: configured + command line
        //
        let mut all_holidays = cfg.holidays.clone();
        for h in holidays {
            if parse_date(h).is_none() {
                return Err(AppError::InvalidDate(h.to_string()));
            }
            if !all_holidays.contains(h) {
                all_holidays.push(h.clone());
            }
        }
        calc.set_holidays(all_holidays);

        if *advanced {
            calc.toggle_advanced_options();
        }

        //
        // 5. Calculate
        //
        let service: Box<dyn WorkingHoursService> = if *offline {
            Box::new(LocalService)
        } else {
            let client = ApiClient::new(&cfg.api_base_url, cfg.timeout())?;
            Box::new(HttpService::new(client))
        };

        let resp = calc.calculate_working_hours(service.as_ref()).await?;

        //
        // 6. Output
        //
        if *json {
            println!("{}", serde_json::to_string_pretty(&resp)?);
        } else {
            print_result(&calc, &resp);
        }
    }

    Ok(())
}

fn override_hour(value: Option<u32>, current: u32) -> AppResult<u32> {
    value.map(check_hour).transpose().map(|v| v.unwrap_or(current))
}

fn print_result(calc: &WorkingHoursCalculator, resp: &WorkingHoursResponse) {
    header("Working hours");

    let mut table = Table::new(vec![
        Column {
            header: "Field".into(),
            width: 16,
        },
        Column {
            header: "Value".into(),
            width: 28,
        },
    ]);

    table.add_row(vec!["Start".into(), resp.start_time.clone()]);
    table.add_row(vec!["End".into(), resp.end_time.clone()]);
    table.add_row(vec![
        "Working hours".into(),
        colorize_total(&format!(
            "{} ({})",
            hours2readable(resp.working_hours),
            mins2readable(resp.working_minutes())
        )),
    ]);
    table.add_row(vec![
        "Working days".into(),
        colorize_optional(&resp.working_days.to_string()),
    ]);
    table.add_row(vec!["Total days".into(), resp.total_days.to_string()]);
    table.add_row(vec![
        "Lunch deducted".into(),
        colorize_optional(&hours2readable(resp.lunch_deducted)),
    ]);

    if calc.show_advanced_options() {
        let w = calc.window();
        table.add_row(vec![
            "Working window".into(),
            format!(
                "{:02}:00-{:02}:00 ({}h/day)",
                w.work_start_hour,
                w.work_end_hour,
                w.work_hours_per_day()
            ),
        ]);
        table.add_row(vec![
            "Lunch".into(),
            format!(
                "{:02}:00-{:02}:00 ({})",
                w.lunch_start_hour,
                w.lunch_end_hour,
                if w.deduct_lunch { "deducted" } else { "not deducted" }
            ),
        ]);
        table.add_row(vec!["Timezone".into(), calc.timezone().to_string()]);
        if !calc.holidays().is_empty() {
            table.add_row(vec!["Holidays".into(), calc.holidays().join(", ")]);
        }
    }

    print!("{}", table.render());
}
