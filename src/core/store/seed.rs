//! Initial rows for freshly created tables.

use rusqlite::{params, Connection};

use crate::error::{Error, Result};

/// (name, icon_path, icon_type)
pub const TECHNOLOGIES: &[(&str, &str, &str)] = &[
    ("React", "/icons/react.svg", "svg"),
    ("Next.js", "/icons/nextjs.svg", "svg"),
    ("Vue", "/icons/vue.svg", "svg"),
    ("TypeScript", "/icons/typescript.svg", "svg"),
    ("JavaScript", "/icons/javascript.svg", "svg"),
    ("Node.js", "/icons/nodejs.svg", "svg"),
    ("Express", "/icons/express.svg", "svg"),
    ("Python", "/icons/python.svg", "svg"),
    ("Django", "/icons/django.svg", "svg"),
    ("Rust", "/icons/rust.svg", "svg"),
    ("Go", "/icons/go.svg", "svg"),
    ("PostgreSQL", "/icons/postgresql.svg", "svg"),
    ("MongoDB", "/icons/mongodb.svg", "svg"),
    ("SQLite", "/icons/sqlite.svg", "svg"),
    ("Redis", "/icons/redis.svg", "svg"),
    ("Docker", "/icons/docker.svg", "svg"),
    ("Tailwind CSS", "/icons/tailwindcss.svg", "svg"),
    ("GraphQL", "/icons/graphql.svg", "svg"),
    ("AWS", "/icons/aws.png", "png"),
    ("Firebase", "/icons/firebase.png", "png"),
];

pub struct SampleProject {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tech: &'static str,
    pub start_date: &'static str,
    pub end_date: &'static str,
}

pub const PROJECTS: &[SampleProject] = &[
    SampleProject {
        title: "Portfolio Site",
        description: "Static portfolio built from a generated project manifest.",
        image: "/images/portfolio.png",
        tech: "Next.js, TypeScript, Tailwind CSS",
        start_date: "2023-01-10",
        end_date: "2023-03-02",
    },
    SampleProject {
        title: "Task Tracker API",
        description: "REST service for teams to track tasks and deadlines.",
        image: "/images/task-tracker.png",
        tech: "Node.js, Express, MongoDB",
        start_date: "2022-05-01",
        end_date: "2022-09-15",
    },
    SampleProject {
        title: "Sensor Dashboard",
        description: "Live charts for home weather sensors.",
        image: "/images/sensor-dashboard.png",
        tech: "React, Python, PostgreSQL",
        start_date: "2024-02-01",
        end_date: "",
    },
];

pub fn seed_technologies(conn: &Connection) -> Result<usize> {
    let mut stmt = conn
        .prepare("INSERT OR IGNORE INTO technologies (name, icon_path, icon_type) VALUES (?1, ?2, ?3)")
        .map_err(|e| Error::database_query(e, Some("seed technologies".to_string())))?;

    let mut inserted = 0;
    for (name, icon_path, icon_type) in TECHNOLOGIES {
        inserted += stmt
            .execute(params![name, icon_path, icon_type])
            .map_err(|e| Error::database_query(e, Some(format!("seed technology {}", name))))?;
    }

    Ok(inserted)
}

pub fn seed_projects(conn: &Connection) -> Result<usize> {
    let mut stmt = conn
        .prepare(
            "INSERT INTO projects (title, description, image, tech, start_date, end_date)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )
        .map_err(|e| Error::database_query(e, Some("seed projects".to_string())))?;

    let mut inserted = 0;
    for p in PROJECTS {
        inserted += stmt
            .execute(params![
                p.title,
                p.description,
                p.image,
                p.tech,
                p.start_date,
                p.end_date
            ])
            .map_err(|e| Error::database_query(e, Some(format!("seed project {}", p.title))))?;
    }

    Ok(inserted)
}
