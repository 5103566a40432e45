//! User-facing program text.
//!
//! Every string the menus print lives in a [`Messages`] table. The flows only
//! ever receive a `&Messages`, so switching language is a configuration choice
//! and never a second copy of the control flow.

use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    Swedish,
}

impl Language {
    pub fn messages(&self) -> &'static Messages {
        match self {
            Language::English => &ENGLISH,
            Language::Swedish => &SWEDISH,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Swedish => "sv",
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Language::English),
            "sv" | "swedish" | "svenska" => Ok(Language::Swedish),
            other => Err(format!(
                "unknown language '{}', expected 'en' or 'sv'",
                other
            )),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

pub struct Messages {
    /// Prefix of every field prompt, followed by the field name.
    pub enter: &'static str,
    pub invalid_choice_prompt: &'static str,

    pub main_menu_title: &'static str,
    pub main_menu: [&'static str; 6],
    pub main_menu_hint: &'static str,
    pub invalid_choice_main: &'static str,
    pub select_before_update: &'static str,
    pub select_before_delete: &'static str,
    pub goodbye: &'static str,

    pub all_movies: &'static str,
    pub no_movies: &'static str,

    pub selected_movie: &'static str,
    pub movie_not_found: &'static str,
    pub movie_menu_title: &'static str,
    pub movie_menu: [&'static str; 3],
    pub invalid_choice_movie: &'static str,
    pub back_to_main: &'static str,
    pub movie_deleted: &'static str,

    pub updating_movie: &'static str,
    pub update_menu_title: &'static str,
    pub update_menu: [&'static str; 7],
    pub invalid_choice_update: &'static str,
    pub back_to_movie: &'static str,
    pub movie_updated: &'static str,
    pub invalid_year: &'static str,

    pub update_list: &'static str,
    pub invalid_index: &'static str,
    pub invalid_value: &'static str,
    pub invalid_action: &'static str,

    pub adding_movie: &'static str,
    pub list_hint: &'static str,
    pub movie_added: &'static str,

    pub headers: [&'static str; 7],
}

impl Messages {
    pub fn prompt(&self, field: &str) -> String {
        format!("{} {}: ", self.enter, field)
    }
}

pub static ENGLISH: Messages = Messages {
    enter: "Enter",
    invalid_choice_prompt: "Invalid choice. Enter a number between 1 and 7.",

    main_menu_title: "Menu:",
    main_menu: [
        "1. Show all movies",
        "2. Select a movie",
        "3. Add a new movie",
        "4. Update a movie (title, director, release year, genres, ratings, cast)",
        "5. Delete a movie",
        "6. Exit",
    ],
    main_menu_hint: "Enter your choice (1-6).",
    invalid_choice_main: "Invalid choice. Enter a number between 1 and 6.",
    select_before_update: "Select a movie before updating.",
    select_before_delete: "Select a movie before deleting.",
    goodbye: "Exiting the application. Goodbye!",

    all_movies: "All movies:",
    no_movies: "No movies found.",

    selected_movie: "Selected movie:",
    movie_not_found: "Movie not found.",
    movie_menu_title: "Movie options:",
    movie_menu: [
        "1. Update movie information",
        "2. Delete this movie",
        "3. Back to main menu",
    ],
    invalid_choice_movie: "Invalid choice. Enter a number between 1 and 3.",
    back_to_main: "Returning to the main menu.",
    movie_deleted: "Movie deleted successfully!",

    updating_movie: "Updating movie:",
    update_menu_title: "Update options:",
    update_menu: [
        "1. Update title",
        "2. Update director",
        "3. Update release year",
        "4. Update genres",
        "5. Update ratings",
        "6. Update cast",
        "7. Back to movie options",
    ],
    invalid_choice_update: "Invalid choice. Enter a number between 1 and 7.",
    back_to_movie: "Returning to movie options.",
    movie_updated: "Movie updated successfully!",
    invalid_year: "Invalid release year. Enter a whole number.",

    update_list: "Update",
    invalid_index: "Invalid index. Enter a valid index to remove.",
    invalid_value: "Invalid value. Nothing was added.",
    invalid_action: "Invalid action. Enter \"add\" or \"remove\".",

    adding_movie: "Adding a new movie:",
    list_hint: "Separate several values with commas, or leave empty.",
    movie_added: "Movie added with id",

    headers: [
        "id", "title", "director", "year", "genres", "ratings", "cast",
    ],
};

pub static SWEDISH: Messages = Messages {
    enter: "Ange",
    invalid_choice_prompt: "Ogiltigt val. Ange ett nummer mellan 1 och 7.",

    main_menu_title: "Meny:",
    main_menu: [
        "1. Visa alla filmer",
        "2. Välj en film",
        "3. Lägg till en ny film",
        "4. Uppdatera en film (Uppdatera titel, regissör, släppår, genrer, betyg, skådespelare)",
        "5. Ta bort en film",
        "6. Avsluta",
    ],
    main_menu_hint: "Ange ditt val (1-6).",
    invalid_choice_main: "Ogiltigt val. Ange ett nummer mellan 1 och 6.",
    select_before_update: "Välj en film innan du uppdaterar.",
    select_before_delete: "Välj en film innan du tar bort.",
    goodbye: "Avslutar applikationen. Hejdå!",

    all_movies: "Alla filmer:",
    no_movies: "Inga filmer hittades.",

    selected_movie: "Vald film:",
    movie_not_found: "Film ej hittad.",
    movie_menu_title: "Filmalternativ:",
    movie_menu: [
        "1. Uppdatera filminformation",
        "2. Ta bort denna film",
        "3. Tillbaka till huvudmenyn",
    ],
    invalid_choice_movie: "Ogiltigt val. Ange ett nummer mellan 1 och 3.",
    back_to_main: "Återgår till huvudmenyn.",
    movie_deleted: "Film borttagen framgångsrikt!",

    updating_movie: "Uppdaterar film:",
    update_menu_title: "Uppdateringsalternativ:",
    update_menu: [
        "1. Uppdatera titel",
        "2. Uppdatera regissör",
        "3. Uppdatera släppår",
        "4. Uppdatera genrer",
        "5. Uppdatera betyg",
        "6. Uppdatera skådespelare",
        "7. Tillbaka till filmalternativ",
    ],
    invalid_choice_update: "Ogiltigt val. Ange ett nummer mellan 1 och 7.",
    back_to_movie: "Återgår till filmalternativ.",
    movie_updated: "Film uppdaterad framgångsrikt!",
    invalid_year: "Ogiltigt släppår. Ange ett heltal.",

    update_list: "Uppdatera",
    invalid_index: "Ogiltig index. Ange ett giltigt index att ta bort.",
    invalid_value: "Ogiltigt värde. Inget lades till.",
    invalid_action: "Ogiltig åtgärd. Ange \"add\" eller \"remove\".",

    adding_movie: "Lägger till en ny film:",
    list_hint: "Separera flera värden med kommatecken, eller lämna tomt.",
    movie_added: "Film tillagd med id",

    headers: [
        "id",
        "titel",
        "regissör",
        "år",
        "genrer",
        "betyg",
        "skådespelare",
    ],
};
