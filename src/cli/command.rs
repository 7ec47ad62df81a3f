use crate::errors::AppError;
use crate::store::StorageMedium;
use crate::store::file::DEFAULT_DB_PATH;
use crate::store::storage_port::ExportFormat;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "addressbook", version, about = "Interactive Address Book")]
pub struct Cli {
    /// Path of the address book database file
    #[arg(long, env = "ADDRESSBOOK_PATH", default_value_t = String::from(DEFAULT_DB_PATH))]
    pub db_path: String,

    /// Storage choice (file, mem) are available
    #[arg(long, env = "STORAGE_CHOICE", value_enum, default_value_t = StorageMedium::File)]
    pub storage: StorageMedium,

    /// Runs the interactive menu when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export contacts to a .json or .csv file
    Export {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,

        /// File path to the destination location for export file
        #[arg(short, long)]
        des: Option<String>,
    },
}

pub const MENU: &str = "What would you like to Do?
(0) - Create Person
\tEnter the new person's name, email, and phone number
(1) - Show Person
\tShow a person's details using their contact ID #
(2) - Update Person
\tUpdate a person's name, email, and phone number
(3) - Delete Person
\tDelete a person using their contact ID #
(4) - List People
\tShow all saved contacts
(5) - Quit
\tQuits the application
";

pub const PHONE_TYPE_PROMPT: &str = "Phone Type (Mobile - 0, Home - 1, Work - 2)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    CreatePerson,
    ShowPerson,
    UpdatePerson,
    DeletePerson,
    ListAllPeople,
    Quit,
}

impl TryFrom<i64> for MenuOption {
    type Error = AppError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(MenuOption::CreatePerson),
            1 => Ok(MenuOption::ShowPerson),
            2 => Ok(MenuOption::UpdatePerson),
            3 => Ok(MenuOption::DeletePerson),
            4 => Ok(MenuOption::ListAllPeople),
            5 => Ok(MenuOption::Quit),
            other => Err(AppError::UnknownOption(other)),
        }
    }
}

pub fn parse_command_from_menu(input: &str) -> Result<MenuOption, AppError> {
    let option = input
        .trim()
        .parse::<i64>()
        .map_err(|_| AppError::ParseCommand(input.to_string()))?;

    MenuOption::try_from(option)
}
