// SPDX-FileCopyrightText: 2026 Codehub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Subcommand implementations.
//!
//! Each command performs exactly the Store/Gate operations the matching
//! view performs, then prints the outcome. User-level rejections (bad
//! credentials, not logged in, unknown project) are printed, not errors.

use std::sync::Arc;
use std::time::Duration;

use clap::Args;
use tracing::debug;

use codehub_config::model::CodehubConfig;
use codehub_core::{CodehubError, KvStore, Project, ProjectType};
use codehub_hub::store::SharedStore;
use codehub_hub::{
    apply_profile_update, authenticate, new_project_id, parse_hashtags, seed, ChatResponder,
    HubStore, ProfileUpdate,
};
use codehub_storage::{MemoryKv, SqliteKv};

/// Everything a command needs: the config and the loaded store.
pub struct Context {
    pub config: CodehubConfig,
    pub store: SharedStore,
}

impl Context {
    /// Open the storage backend and load the store from it.
    pub async fn open(config: CodehubConfig, ephemeral: bool) -> Result<Self, CodehubError> {
        let kv: Arc<dyn KvStore> = if ephemeral {
            debug!("using in-memory storage, state will not persist");
            Arc::new(MemoryKv::new())
        } else {
            Arc::new(SqliteKv::open(&config.storage).await?)
        };

        let store = HubStore::load(kv).await.into_shared();
        Ok(Self { config, store })
    }
}

/// Arguments for `codehub share`.
#[derive(Args, Debug)]
pub struct ShareArgs {
    /// Project name.
    pub name: String,
    /// Language or framework, e.g. "React", "Python".
    pub language: String,
    /// The source code itself, or a description/URL for file entries.
    pub content: String,
    /// Share as a file entry instead of a code entry.
    #[arg(long)]
    pub file: bool,
    /// Developer notes.
    #[arg(long)]
    pub notes: Option<String>,
    /// Preview image URL.
    #[arg(long, default_value = "https://picsum.photos/id/1/800/400")]
    pub preview_url: String,
}

/// Arguments for `codehub profile`. Omitted fields keep their current value.
#[derive(Args, Debug)]
pub struct ProfileArgs {
    /// New display name.
    #[arg(long)]
    pub name: Option<String>,
    /// New photo URL.
    #[arg(long)]
    pub photo_url: Option<String>,
    /// New personal quote.
    #[arg(long)]
    pub quote: Option<String>,
    /// Comma-separated hashtags.
    #[arg(long)]
    pub hashtags: Option<String>,
    /// Current password; required when setting a new one.
    #[arg(long)]
    pub current_password: Option<String>,
    /// New password.
    #[arg(long)]
    pub new_password: Option<String>,
}

pub async fn catalog(ctx: &Context, query: Option<&str>) -> Result<(), CodehubError> {
    let store = ctx.store.lock().await;
    let hits = store.search(query.unwrap_or(""));

    if hits.is_empty() {
        println!("No projects found matching your search.");
        return Ok(());
    }

    for p in &hits {
        println!(
            "{:<10} {:<4} {:<10} {:<40} ♥ {:<5} ⇩ {}",
            p.id, p.kind, p.language, p.name, p.likes, p.downloads
        );
    }
    Ok(())
}

pub async fn show(ctx: &Context, id: &str) -> Result<(), CodehubError> {
    let store = ctx.store.lock().await;
    let Some(p) = store.project(id) else {
        println!("Project Not Found");
        return Ok(());
    };

    let author = seed::author_or_default(&p.author_id);
    let shared = chrono::DateTime::from_timestamp_millis(p.created_at)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default();

    println!("{} [{} / {}]", p.name, p.kind, p.language);
    println!("Shared by {} on {}", author.name, shared);
    println!("♥ {}  ⇩ {}", p.likes, p.downloads);
    if let Some(notes) = &p.notes {
        println!("\n{notes}");
    }
    println!("\n{}", p.content);
    Ok(())
}

pub async fn like(ctx: &Context, id: &str) -> Result<(), CodehubError> {
    let mut store = ctx.store.lock().await;
    store.like_project(id).await;
    match store.project(id) {
        Some(p) => println!("♥ {}", p.likes),
        None => println!("Project Not Found"),
    }
    Ok(())
}

pub async fn download(ctx: &Context, id: &str) -> Result<(), CodehubError> {
    let mut store = ctx.store.lock().await;
    store.record_download(id).await;
    match store.project(id) {
        Some(p) => println!("{}", p.content),
        None => println!("Project Not Found"),
    }
    Ok(())
}

pub async fn share(ctx: &Context, args: ShareArgs) -> Result<(), CodehubError> {
    let mut store = ctx.store.lock().await;
    let Some(admin) = store.session() else {
        println!("Not logged in.");
        return Ok(());
    };

    let project = Project {
        id: new_project_id(),
        name: args.name,
        language: args.language,
        kind: if args.file {
            ProjectType::File
        } else {
            ProjectType::Code
        },
        content: args.content,
        notes: args.notes,
        preview_url: args.preview_url,
        likes: 0,
        downloads: 0,
        author_id: admin.id.clone(),
        created_at: chrono::Utc::now().timestamp_millis(),
    };

    let id = project.id.clone();
    store.add_project(project).await;
    println!("Deployed project {id}");
    Ok(())
}

pub async fn remove(ctx: &Context, id: &str) -> Result<(), CodehubError> {
    let mut store = ctx.store.lock().await;
    if store.session().is_none() {
        println!("Not logged in.");
        return Ok(());
    }
    store.delete_project(id).await;
    println!("Removed {id}");
    Ok(())
}

pub async fn chat(ctx: &Context, text: &str) -> Result<(), CodehubError> {
    if !ctx.config.chat.auto_reply {
        let mut store = ctx.store.lock().await;
        let message = codehub_hub::responder::user_message(text);
        println!("[{}] {}", message.sender, message.text);
        store.post_message(message).await;
        return Ok(());
    }

    let responder = ChatResponder::new(
        ctx.store.clone(),
        Duration::from_secs(ctx.config.chat.reply_delay_secs),
    );
    let (message, handle) = responder.post(text).await;
    println!("[{}] {}", message.sender, message.text);

    handle.await.map_err(|e| CodehubError::Internal(e.to_string()))?;

    let store = ctx.store.lock().await;
    if let Some(reply) = store.messages().last() {
        println!("[{}] {}", reply.sender, reply.text);
    }
    Ok(())
}

pub async fn legends() -> Result<(), CodehubError> {
    for admin in seed::builtin_admins() {
        println!("{} [{}]", admin.name, admin.role);
        println!("  \"{}\"", admin.quote);
        println!("  {}", admin.hashtags.join(" "));
    }
    Ok(())
}

pub async fn login(ctx: &Context, username: &str, password: &str) -> Result<(), CodehubError> {
    let admins = seed::builtin_admins();
    match authenticate(&admins, username, password) {
        Some(admin) => {
            let name = admin.name.clone();
            let mut store = ctx.store.lock().await;
            store.set_session(Some(admin.clone())).await;
            println!("Welcome back, {name}");
        }
        None => println!("Invalid credentials access restricted."),
    }
    Ok(())
}

pub async fn logout(ctx: &Context) -> Result<(), CodehubError> {
    let mut store = ctx.store.lock().await;
    store.set_session(None).await;
    println!("Signed out.");
    Ok(())
}

pub async fn whoami(ctx: &Context) -> Result<(), CodehubError> {
    let store = ctx.store.lock().await;
    match store.session() {
        Some(admin) => {
            println!("{} ({}, {})", admin.name, admin.username, admin.role);
            println!("{}", admin.quote);
            println!("{}", admin.hashtags.join(" "));

            let mine = store.projects_by_author(&admin.id);
            if mine.is_empty() {
                println!("\nYou haven't shared any projects yet.");
            } else {
                println!("\nYour projects:");
                for p in &mine {
                    println!("  {:<10} {}", p.id, p.name);
                }
            }
        }
        None => println!("Not logged in."),
    }
    Ok(())
}

pub async fn profile(ctx: &Context, args: ProfileArgs) -> Result<(), CodehubError> {
    let mut store = ctx.store.lock().await;
    let Some(admin) = store.session().cloned() else {
        println!("Not logged in.");
        return Ok(());
    };

    let update = ProfileUpdate {
        name: args.name.unwrap_or_else(|| admin.name.clone()),
        photo_url: args.photo_url.unwrap_or_else(|| admin.photo_url.clone()),
        quote: args.quote.unwrap_or_else(|| admin.quote.clone()),
        hashtags: args
            .hashtags
            .map(|h| parse_hashtags(&h))
            .unwrap_or_else(|| admin.hashtags.clone()),
        current_password: args.current_password,
        new_password: args.new_password,
    };

    match apply_profile_update(&admin, &update) {
        Ok(updated) => {
            store.update_session_admin(updated).await;
            println!("Profile updated.");
        }
        Err(CodehubError::PasswordMismatch) => println!("Old password incorrect!"),
        Err(e) => return Err(e),
    }
    Ok(())
}
