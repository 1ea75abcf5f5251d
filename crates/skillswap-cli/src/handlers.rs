//! Executes parsed commands against a store and returns the JSON to print.

use crate::{
    CliError, CliResult, commands::Commands, profile_commands::ProfileCommands,
    session_commands::SessionCommands, skill_commands::SkillCommands,
    user_commands::UserCommands,
};

use skillswap_core::{NewSkill, NewUser, SkillCategory, SkillLevel, SkillList, User};
use skillswap_store::{DirectoryStore, KeyValueStorage, timestamp_id};

use std::str::FromStr;

use log::info;
use serde_json::{Value, json};

/// Run one command. The catalog is seeded first if missing.
pub fn execute<S: KeyValueStorage>(
    store: &mut DirectoryStore<S>,
    command: Commands,
) -> CliResult<Value> {
    store.initialize()?;

    match command {
        Commands::Skill { action } => skill(store, action),
        Commands::User { action } => user(store, action),
        Commands::Session { action } => session(store, action),
        Commands::Profile { action } => profile(store, action),
    }
}

fn skill<S: KeyValueStorage>(
    store: &DirectoryStore<S>,
    action: SkillCommands,
) -> CliResult<Value> {
    let skills = match action {
        SkillCommands::List => store.all_skills()?,
        SkillCommands::Search { query, category } => {
            let category = category
                .as_deref()
                .map(SkillCategory::from_str)
                .transpose()?;
            store.search_skills(&query, category)?
        }
    };

    Ok(serde_json::to_value(skills)?)
}

fn user<S: KeyValueStorage>(
    store: &mut DirectoryStore<S>,
    action: UserCommands,
) -> CliResult<Value> {
    match action {
        UserCommands::Create {
            name,
            email,
            avatar,
            bio,
        } => {
            let mut new_user = NewUser::new(name, email);
            new_user.avatar = avatar;
            new_user.bio = bio;

            let user = store.create_user(new_user)?;
            Ok(serde_json::to_value(user)?)
        }
        UserCommands::Get { email } => match store.user_by_email(&email)? {
            Some(user) => Ok(serde_json::to_value(user)?),
            None => Err(CliError::user_not_found(email)),
        },
        UserCommands::List => Ok(serde_json::to_value(store.users()?)?),
    }
}

fn session<S: KeyValueStorage>(
    store: &mut DirectoryStore<S>,
    action: SessionCommands,
) -> CliResult<Value> {
    match action {
        SessionCommands::Show => Ok(serde_json::to_value(store.current_user()?)?),
        SessionCommands::Login { email } => {
            let user = store
                .user_by_email(&email)?
                .ok_or_else(|| CliError::user_not_found(&email))?;

            store.set_current_user(Some(&user))?;
            info!("Signed in as {}", user.email);
            Ok(serde_json::to_value(user)?)
        }
        SessionCommands::Logout => {
            store.set_current_user(None)?;
            Ok(Value::Null)
        }
    }
}

fn profile<S: KeyValueStorage>(
    store: &mut DirectoryStore<S>,
    action: ProfileCommands,
) -> CliResult<Value> {
    let mut user: User = store.current_user()?.ok_or_else(CliError::not_signed_in)?;

    let skill = match action {
        ProfileCommands::Update {
            name,
            email,
            bio,
            avatar,
        } => {
            if let Some(name) = name {
                user.name = name;
            }
            if let Some(email) = email {
                user.email = email;
            }
            if bio.is_some() {
                user.bio = bio;
            }
            if avatar.is_some() {
                user.avatar = avatar;
            }
            None
        }
        ProfileCommands::AddSkill {
            list,
            name,
            category,
            level,
            description,
        } => {
            let list = SkillList::from_str(&list)?;
            let new_skill = NewSkill {
                name,
                category: SkillCategory::from_str(&category)?,
                level: SkillLevel::from_str(&level)?,
                description,
            };
            Some(user.add_skill(list, new_skill, timestamp_id())?)
        }
        ProfileCommands::RemoveSkill { list, id } => {
            let list = SkillList::from_str(&list)?;
            if !user.remove_skill(list, &id) {
                info!("No {list} skill with id {id} on user {}", user.id);
            }
            None
        }
    };

    let outcome = store.update_user(&user)?;

    let mut output = json!({ "user": user, "outcome": outcome });
    if let Some(skill) = skill {
        output["skill"] = serde_json::to_value(skill)?;
    }
    Ok(output)
}
