use anyhow::Result;
use colored::*;
use std::io::{self, BufRead, Write};
use tracing::info;

use crate::collection::{CalorieAlert, RecipeCollection};
use crate::config::Config;
use crate::error::RecipeError;
use crate::ingredient::{parse_quantity, FoodGroup, Ingredient};
use crate::prompt::{PromptError, Prompter};
use crate::recipe::Recipe;

const MENU_ITEMS: [&str; 7] = [
    "Enter Recipe",
    "Display Recipe List",
    "Display Recipe by Name",
    "Scale Recipe",
    "Reset Quantities",
    "Clear Recipe",
    "Exit",
];

/// Run the interactive menu on stdin/stdout
pub fn run(config: &Config) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), config);
    session.run()
}

/// What the loop should do after a menu choice
enum Flow {
    Continue,
    Exit,
}

/// One interactive session: a prompter plus the recipes entered so far
pub struct Session<R, W> {
    prompter: Prompter<R, W>,
    collection: RecipeCollection,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, config: &Config) -> Self {
        Self {
            prompter: Prompter::new(input, output),
            collection: RecipeCollection::with_threshold(config.recipes.calorie_threshold),
        }
    }

    pub fn collection(&self) -> &RecipeCollection {
        &self.collection
    }

    /// Everything written so far
    pub fn output(&self) -> &W {
        self.prompter.output_ref()
    }

    pub fn into_output(self) -> W {
        self.prompter.into_output()
    }

    /// Loop over the menu until Exit is chosen or input ends
    pub fn run(&mut self) -> Result<()> {
        info!(
            threshold = self.collection.calorie_threshold(),
            "Recipe session started"
        );

        loop {
            match self.step() {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(PromptError::Closed) => {
                    info!("Input closed, ending session");
                    break;
                }
                Err(PromptError::Io(e)) => return Err(e.into()),
            }
        }

        info!(recipes = self.collection.len(), "Recipe session ended");
        Ok(())
    }

    fn step(&mut self) -> Result<Flow, PromptError> {
        self.print_menu()?;
        let choice = self
            .prompter
            .ask(&format!("Enter your choice (1-{}): ", MENU_ITEMS.len()).magenta().to_string())?;
        writeln!(self.out())?;

        match choice.trim().parse::<u32>() {
            Ok(1) => self.enter_recipe()?,
            Ok(2) => self.display_list()?,
            Ok(3) => {
                let name = self.prompter.ask("Enter the name of the recipe to display: ")?;
                self.display_recipe(&name)?;
            }
            Ok(4) => {
                let name = self.prompter.ask("Enter the name of the recipe to scale: ")?;
                let factor: f64 = self
                    .prompter
                    .ask_parsed("Enter scaling factor (0.5, 2, or 3): ", "scaling factor")?;
                let result = self.collection.scale_by_name(&name, factor);
                self.show_rendered(result)?;
            }
            Ok(5) => {
                let name = self
                    .prompter
                    .ask("Enter the name of the recipe to reset quantities: ")?;
                match self.collection.reset_by_name(&name) {
                    Ok(outcome) => {
                        if let Some(warning) = outcome.warning {
                            self.report(warning)?;
                        }
                        write!(self.out(), "{}", outcome.rendered.yellow())?;
                    }
                    Err(e) => self.report(e)?,
                }
            }
            Ok(6) => {
                self.collection.clear();
                writeln!(self.out(), "{}", "All recipes cleared.".yellow())?;
            }
            Ok(7) => {
                writeln!(self.out(), "Exiting...")?;
                return Ok(Flow::Exit);
            }
            _ => {
                writeln!(self.out(), "Invalid choice. Please try again.")?;
            }
        }

        Ok(Flow::Continue)
    }

    fn print_menu(&mut self) -> Result<(), PromptError> {
        let out = self.prompter.output();
        writeln!(out)?;
        writeln!(out, "{}", "----- Recipe Application -----".magenta().bold())?;
        for (i, item) in MENU_ITEMS.iter().enumerate() {
            writeln!(out, "{}", format!("{}. {}", i + 1, item).magenta())?;
        }
        Ok(())
    }

    fn enter_recipe(&mut self) -> Result<(), PromptError> {
        let p = &mut self.prompter;

        let name = p.ask(&"Enter the name of the recipe: ".blue().to_string())?;
        let mut recipe = Recipe::new(name.trim());

        let ingredient_count: usize =
            p.ask_parsed(&"Enter the number of ingredients: ".blue().to_string(), "number")?;
        for i in 0..ingredient_count {
            writeln!(p.output(), "{}", format!("Enter ingredient {}:", i + 1).blue())?;
            let name = p.ask("Ingredient Name: ")?;
            let quantity = p.ask_with("Ingredient Quantity: ", parse_quantity)?;
            let unit = p.ask("Unit of Measurement (L, KG, ml, etc.): ")?;
            let calories: u32 = p.ask_parsed("Calories: ", "calorie count")?;
            let group_prompt = format!("Food Group ({}): ", food_group_names());
            let group = p.ask_with(&group_prompt, |answer| answer.parse::<FoodGroup>())?;

            recipe.add_ingredient(Ingredient::new(
                name.trim(),
                quantity,
                unit.trim(),
                calories,
                group,
            ));
        }

        writeln!(p.output())?;
        let step_count: usize =
            p.ask_parsed(&"Enter the number of steps: ".red().to_string(), "number")?;
        for i in 0..step_count {
            let step = p.ask(&format!("Enter step {}: ", i + 1).red().to_string())?;
            recipe.add_step(step.trim());
        }

        let rendered = recipe.render();
        let alert = self.collection.add(recipe);
        writeln!(self.out())?;
        write!(self.out(), "{}", rendered.yellow())?;
        self.show_alert(alert)
    }

    fn display_list(&mut self) -> Result<(), PromptError> {
        let names = self.collection.list();
        writeln!(self.out(), "{}", "Recipe List:".red().bold())?;
        if names.is_empty() {
            writeln!(self.out(), "No recipes entered yet.")?;
        }
        for name in names {
            writeln!(self.out(), "{}", name.red())?;
        }
        Ok(())
    }

    fn display_recipe(&mut self, name: &str) -> Result<(), PromptError> {
        match self.collection.display_by_name(name) {
            Ok(displayed) => {
                write!(self.out(), "{}", displayed.rendered.yellow())?;
                self.show_alert(displayed.alert)
            }
            Err(e) => self.report(e),
        }
    }

    fn show_rendered(&mut self, result: Result<String, RecipeError>) -> Result<(), PromptError> {
        match result {
            Ok(rendered) => {
                write!(self.out(), "{}", rendered.yellow())?;
                Ok(())
            }
            Err(e) => self.report(e),
        }
    }

    fn show_alert(&mut self, alert: Option<CalorieAlert>) -> Result<(), PromptError> {
        if let Some(alert) = alert {
            writeln!(self.out(), "{}", alert.to_string().red().bold())?;
        }
        Ok(())
    }

    fn report(&mut self, err: RecipeError) -> Result<(), PromptError> {
        let line = match &err {
            RecipeError::NotFound { .. } => err.to_string().cyan(),
            _ => err.to_string().yellow(),
        };
        writeln!(self.out(), "{}", line)?;
        Ok(())
    }

    fn out(&mut self) -> &mut W {
        self.prompter.output()
    }
}

fn food_group_names() -> String {
    FoodGroup::ALL
        .iter()
        .map(FoodGroup::name)
        .collect::<Vec<_>>()
        .join(", ")
}
