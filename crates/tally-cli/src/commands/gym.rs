use chrono::NaiveDate;
use tally_core::gym::{Client, Member, Trainer};
use tally_core::{Gym, TallyError};

use crate::app::{sample_gym, AppContext};
use crate::config::GymSection;
use crate::helpers::{parse_date, parse_f64, parse_int, parse_month, parse_text};
use crate::output::{
    clients_json, clients_table, people_json, people_table, print_json, trainers_json,
    trainers_table,
};
use crate::ui::{blank_line, format_date, UiContext};

use super::menu::{banner, confirm, listing, settle, Console, MenuAction, Step};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    AddTrainer,
    AddClient,
    TrainersByAge,
    ClientsByAge,
    BmiAbove,
    Alphabetical,
    OldestFirst,
    Birthdays,
    Exit,
}

impl MenuAction for Action {
    const ALL: &'static [Self] = &[
        Self::AddTrainer,
        Self::AddClient,
        Self::TrainersByAge,
        Self::ClientsByAge,
        Self::BmiAbove,
        Self::Alphabetical,
        Self::OldestFirst,
        Self::Birthdays,
        Self::Exit,
    ];

    fn label(&self) -> &'static str {
        match self {
            Self::AddTrainer => "Add trainer",
            Self::AddClient => "Add client",
            Self::TrainersByAge => "Trainers by age range",
            Self::ClientsByAge => "Clients by age range",
            Self::BmiAbove => "Clients with BMI above",
            Self::Alphabetical => "Clients in alphabetical order",
            Self::OldestFirst => "Clients from oldest to youngest",
            Self::Birthdays => "Birthdays in month",
            Self::Exit => "Exit",
        }
    }

    fn is_exit(&self) -> bool {
        matches!(self, Self::Exit)
    }
}

pub fn handle_gym(ctx: &AppContext) -> anyhow::Result<()> {
    let config = ctx.config()?;
    let today = ctx.today()?;
    let gym = if ctx.seed() { sample_gym()? } else { Gym::new() };
    let mut session = Session {
        console: Console::new(ctx.ui(), ctx.prompter()),
        settings: &config.gym,
        date_format: &config.ui.date_format,
        today,
        gym,
    };

    let context = format!("as of {}", format_date(&today, &config.ui.date_format));
    banner(ctx.ui(), "gym", Some(&context));
    session.run()
}

struct Session<'a> {
    console: Console<'a>,
    settings: &'a GymSection,
    date_format: &'a str,
    today: NaiveDate,
    gym: Gym,
}

impl Session<'_> {
    fn run(&mut self) -> anyhow::Result<()> {
        while let Some(action) = self.console.choose::<Action>()? {
            let outcome = match action {
                Action::AddTrainer => self.add_trainer(),
                Action::AddClient => self.add_client(),
                Action::TrainersByAge => self.trainers_by_age(),
                Action::ClientsByAge => self.clients_by_age(),
                Action::BmiAbove => self.bmi_above(),
                Action::Alphabetical => {
                    let clients = self.gym.clients_alphabetical();
                    self.show_clients("Clients (A-Z)", &clients)
                }
                Action::OldestFirst => {
                    let clients = self.gym.clients_oldest_first();
                    self.show_clients("Clients (oldest first)", &clients)
                }
                Action::Birthdays => self.birthdays(),
                Action::Exit => break,
            };
            if settle(self.console.ui, outcome)? == Step::InputEnded {
                break;
            }
            blank_line(self.console.ui);
        }
        tracing::debug!(
            trainers = self.gym.trainers().len(),
            clients = self.gym.clients().len(),
            "gym menu closed"
        );
        Ok(())
    }

    fn add_trainer(&mut self) -> anyhow::Result<Step> {
        let Some(name) = self.console.ask("Name", None, parse_text)? else {
            return Ok(Step::InputEnded);
        };
        let Some(birth) = self.console.ask("Birth date (dd/mm/yyyy)", None, parse_date)? else {
            return Ok(Step::InputEnded);
        };
        let Some(cpf) = self.console.ask("CPF (11 digits)", None, parse_text)? else {
            return Ok(Step::InputEnded);
        };
        let Some(cref) = self.console.ask("CREF", None, parse_text)? else {
            return Ok(Step::InputEnded);
        };

        let trainer = self
            .gym
            .add_trainer(Trainer::new(&name, birth, &cpf, &cref)?)?;
        let ui = self.console.ui;
        if ui.mode.is_json() {
            print_json(&trainers_json(&[trainer], self.today))?;
        } else {
            confirm(
                ui,
                "Trainer added",
                &[
                    ("Name", trainer.name().to_string()),
                    ("CPF", trainer.cpf().to_string()),
                    ("CREF", trainer.cref().to_string()),
                ],
            );
        }
        Ok(Step::Done)
    }

    fn add_client(&mut self) -> anyhow::Result<Step> {
        let Some(name) = self.console.ask("Name", None, parse_text)? else {
            return Ok(Step::InputEnded);
        };
        let Some(birth) = self.console.ask("Birth date (dd/mm/yyyy)", None, parse_date)? else {
            return Ok(Step::InputEnded);
        };
        let Some(cpf) = self.console.ask("CPF (11 digits)", None, parse_text)? else {
            return Ok(Step::InputEnded);
        };
        let Some(height) = self.console.ask("Height (m)", None, parse_f64)? else {
            return Ok(Step::InputEnded);
        };
        let Some(weight) = self.console.ask("Weight (kg)", None, parse_f64)? else {
            return Ok(Step::InputEnded);
        };

        let client = self
            .gym
            .add_client(Client::new(&name, birth, &cpf, height, weight)?)?;
        let ui = self.console.ui;
        if ui.mode.is_json() {
            print_json(&clients_json(&[client], self.today))?;
        } else {
            confirm(
                ui,
                "Client added",
                &[
                    ("Name", client.name().to_string()),
                    ("CPF", client.cpf().to_string()),
                    ("BMI", format!("{:.2}", client.bmi())),
                ],
            );
        }
        Ok(Step::Done)
    }

    fn trainers_by_age(&mut self) -> anyhow::Result<Step> {
        let (min, max) = (self.settings.trainer_age_min, self.settings.trainer_age_max);
        let Some((min, max)) = self.ask_age_range(min, max)? else {
            return Ok(Step::InputEnded);
        };

        let ui = self.console.ui;
        let trainers = self.gym.trainers_aged_between(min, max, self.today);
        if ui.mode.is_json() {
            print_json(&trainers_json(&trainers, self.today))?;
        } else {
            let body = trainers_table(ui, &trainers, self.today, self.date_format);
            let heading = format!("Trainers aged {} to {}", min, max);
            listing(ui, &heading, &body, trainers.len());
        }
        Ok(Step::Done)
    }

    fn clients_by_age(&mut self) -> anyhow::Result<Step> {
        let (min, max) = (self.settings.client_age_min, self.settings.client_age_max);
        let Some((min, max)) = self.ask_age_range(min, max)? else {
            return Ok(Step::InputEnded);
        };

        let clients = self.gym.clients_aged_between(min, max, self.today);
        self.show_clients(&format!("Clients aged {} to {}", min, max), &clients)
    }

    fn bmi_above(&mut self) -> anyhow::Result<Step> {
        let default = self.settings.bmi_threshold.to_string();
        let Some(threshold) = self.console.ask("BMI above", Some(&default), parse_f64)? else {
            return Ok(Step::InputEnded);
        };

        let clients = self.gym.clients_with_bmi_above(threshold);
        self.show_clients(&format!("Clients with BMI above {}", threshold), &clients)
    }

    fn birthdays(&mut self) -> anyhow::Result<Step> {
        let Some(month) = self.console.ask("Month (1-12)", None, parse_month)? else {
            return Ok(Step::InputEnded);
        };

        let ui = self.console.ui;
        let people = self.gym.birthdays_in_month(month)?;
        if ui.mode.is_json() {
            print_json(&people_json(&people))?;
        } else {
            let body = people_table(ui, &people, self.date_format);
            listing(ui, &format!("Birthdays in month {}", month), &body, people.len());
        }
        Ok(Step::Done)
    }

    fn ask_age_range(&mut self, min: i32, max: i32) -> anyhow::Result<Option<(i32, i32)>> {
        let parse_age = |value: &str| {
            let age = parse_int(value)?;
            i32::try_from(age).map_err(|_| anyhow::anyhow!("Invalid age: {}", age))
        };
        let (default_min, default_max) = (min.to_string(), max.to_string());
        let Some(min) = self.console.ask("Minimum age", Some(&default_min), parse_age)? else {
            return Ok(None);
        };
        let Some(max) = self.console.ask("Maximum age", Some(&default_max), parse_age)? else {
            return Ok(None);
        };
        if min > max {
            return Err(TallyError::validation(format!(
                "minimum age {} exceeds maximum {}",
                min, max
            ))
            .into());
        }
        Ok(Some((min, max)))
    }

    fn show_clients(&self, heading: &str, clients: &[&Client]) -> anyhow::Result<Step> {
        show_clients(
            self.console.ui,
            heading,
            clients,
            self.today,
            self.date_format,
        )?;
        Ok(Step::Done)
    }
}

fn show_clients(
    ui: &UiContext,
    heading: &str,
    clients: &[&Client],
    today: NaiveDate,
    date_format: &str,
) -> anyhow::Result<()> {
    if ui.mode.is_json() {
        return print_json(&clients_json(clients, today));
    }
    let body = clients_table(ui, clients, today, date_format);
    listing(ui, heading, &body, clients.len());
    Ok(())
}
