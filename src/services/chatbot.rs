// src/services/chatbot.rs
//! Rule-based portfolio responder.
//!
//! Detects an [`Intent`] from keywords and answers from a [`Profile`].
//! Each intent has a few phrasings that carry the same facts; one is picked
//! at random per reply.

use async_trait::async_trait;
use chrono::Timelike;
use rand::seq::IndexedRandom;

use super::matching::{contains_phrase, join_list, normalize, similarity};
use super::profile::Profile;
use super::reply_source::{ReplySource, ReplySourceError};

/// Minimum similarity for a misspelled word to be replaced by a keyword.
pub const SPELLING_SENSITIVITY: f64 = 0.7;
/// Minimum keyword/input similarity for a category to win.
pub const CONFIDENCE_THRESHOLD: f64 = 0.6;

const GREETINGS: &[&str] = &["hi", "hello", "hey", "greetings", "howdy"];
const FAREWELLS: &[&str] = &["bye", "goodbye", "see you", "later", "farewell"];
/// Words that are never spell-corrected.
const FIXED_SPELLINGS: &[&str] = &["exquio", "sayees", "linkedin", "github"];
/// Shorter tokens are left alone; most are ordinary words.
const MIN_CORRECTABLE_LEN: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    Greeting,
    Farewell,
    Name,
    Hometown,
    CurrentLocation,
    Education,
    Interests,
    Languages,
    Skills,
    Tools,
    Project,
    Contact,
    Help,
    Unknown,
}

const KEYWORDS: &[(Intent, &[&str])] = &[
    (Intent::Name, &["name"]),
    (Intent::Hometown, &["from", "hometown", "grew up"]),
    (Intent::CurrentLocation, &["live", "located", "current location", "based"]),
    (
        Intent::Education,
        &["education", "study", "school", "college", "university", "degree"],
    ),
    (Intent::Interests, &["interest", "hobby", "passion"]),
    (Intent::Languages, &["language", "speak", "talk"]),
    (Intent::Skills, &["skill", "ability", "expertise", "proficient"]),
    (Intent::Tools, &["tool", "software", "platform", "technology"]),
    (Intent::Project, &["project", "work", "exquio"]),
    (
        Intent::Contact,
        &["contact", "reach", "connect", "linkedin", "github"],
    ),
    (Intent::Help, &["help"]),
];

/// Replaces likely misspellings of single-word keywords.
pub fn correct_spelling(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            if FIXED_SPELLINGS.contains(&word) || word.chars().count() < MIN_CORRECTABLE_LEN {
                return word.to_string();
            }
            closest_keyword(word).unwrap_or(word).to_string()
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Candidates must share the word's first letter, so "walk" never turns
/// into "talk".
fn closest_keyword(word: &str) -> Option<&'static str> {
    let first = word.chars().next()?;
    let mut best: Option<(&'static str, f64)> = None;
    for keyword in KEYWORDS
        .iter()
        .flat_map(|(_, keywords)| keywords.iter().copied())
        .filter(|k| !k.contains(' ') && k.starts_with(first))
    {
        let score = similarity(word, keyword);
        if score >= SPELLING_SENSITIVITY && best.is_none_or(|(_, s)| score > s) {
            best = Some((keyword, score));
        }
    }
    best.map(|(keyword, _)| keyword)
}

pub fn detect_intent(msg: &str) -> Intent {
    let input = correct_spelling(&normalize(msg));

    if GREETINGS.iter().any(|g| contains_phrase(&input, g)) {
        return Intent::Greeting;
    }
    if FAREWELLS.iter().any(|f| contains_phrase(&input, f)) {
        return Intent::Farewell;
    }

    let mut best = (Intent::Unknown, 0.0);
    for (intent, keywords) in KEYWORDS {
        for keyword in keywords.iter().filter(|k| input.contains(*k)) {
            let score = similarity(keyword, &input);
            if score > best.1 {
                best = (*intent, score);
            }
        }
    }

    if best.1 >= CONFIDENCE_THRESHOLD {
        best.0
    } else {
        Intent::Unknown
    }
}

pub fn time_of_day_greeting(hour: u32) -> &'static str {
    match hour {
        0..=11 => "Good morning!",
        12..=16 => "Good afternoon!",
        _ => "Good evening!",
    }
}

#[derive(Debug, Clone)]
pub struct PortfolioBot {
    profile: Profile,
}

impl PortfolioBot {
    pub fn new(profile: Profile) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn generate_reply(&self, user_msg: &str) -> String {
        pick(self.candidates(detect_intent(user_msg)))
    }

    /// Every phrasing the bot may answer with for `intent`.
    pub fn candidates(&self, intent: Intent) -> Vec<String> {
        let p = &self.profile;
        let name = &p.name;

        match intent {
            Intent::Greeting => {
                let hour = chrono::Local::now().hour();
                vec![
                    format!(
                        "{} I'm {name}'s portfolio assistant. How can I help you today?",
                        time_of_day_greeting(hour)
                    ),
                    format!("Hello! I'm here to share information about {name}'s professional background. What would you like to know?"),
                    format!("Hi there! I can tell you about {name}'s skills, education, and projects. How can I assist you?"),
                ]
            }
            Intent::Farewell => vec![
                "It was great chatting with you! Feel free to come back if you have more questions.".to_string(),
                format!("Goodbye! Don't hesitate to return if you'd like to know more about {name}."),
                format!("Talk to you later! Best of luck exploring {name}'s portfolio."),
            ],
            Intent::Name => vec![
                format!("I'm {name}, an aspiring AI & Data Science professional."),
                format!("My name is {name}, and I specialize in AI and Data Science."),
                format!("You can call me {name}! I work in AI and Data Science."),
            ],
            Intent::Hometown => {
                let town = &p.location.hometown;
                vec![
                    format!("I'm originally from {town}."),
                    format!("My hometown is {town}."),
                    format!("I grew up in {town}."),
                ]
            }
            Intent::CurrentLocation => {
                let place = &p.location.current;
                vec![
                    format!("I'm currently based in {place}."),
                    format!("Right now I'm living in {place}."),
                    format!("These days I'm located in {place}."),
                ]
            }
            Intent::Education => {
                let e = &p.education.current;
                vec![
                    format!(
                        "I'm currently pursuing {} with specialization in {} at {}, {}.",
                        e.degree, e.specialization, e.college, e.university
                    ),
                    format!(
                        "My current academic pursuit is {} with focus on {} from {}, {}.",
                        e.degree, e.specialization, e.college, e.university
                    ),
                    format!(
                        "I'm enrolled in the {} program specializing in {} at {}, {}.",
                        e.degree, e.specialization, e.college, e.university
                    ),
                ]
            }
            Intent::Interests => {
                let interests = join_list(&p.interests);
                vec![
                    format!("I'm particularly interested in {interests}."),
                    format!("My professional interests include {interests}."),
                    format!("I'm passionate about several areas: {interests}."),
                ]
            }
            Intent::Languages => {
                let languages = join_list(&p.languages);
                vec![
                    format!("I'm comfortable communicating in {languages}."),
                    format!("I can speak {languages}."),
                    format!("My language skills include {languages}."),
                ]
            }
            Intent::Skills => {
                let skills = join_list(&p.soft_skills);
                vec![
                    format!("My interpersonal skills include {skills}."),
                    format!("I've developed several soft skills: {skills}."),
                    format!("In terms of professional skills, I excel at {skills}."),
                ]
            }
            Intent::Tools => {
                let tools = join_list(&p.tools);
                vec![
                    format!("In my work, I regularly use tools like {tools}."),
                    format!("My technical toolkit includes {tools}."),
                    format!("I'm proficient with several platforms: {tools}."),
                ]
            }
            Intent::Project => {
                let project = p.featured_project();
                let tech = join_list(&project.technologies);
                vec![
                    format!(
                        "One notable project I worked on is {}, {}, where I used {tech}.",
                        project.name, project.description
                    ),
                    format!(
                        "I developed {}, {}. The project involved working with {tech}.",
                        project.name, project.description
                    ),
                    format!(
                        "Among my projects, {} stands out. It's {}, built using {tech}.",
                        project.name, project.description
                    ),
                ]
            }
            Intent::Contact => {
                let c = &p.contact;
                vec![
                    format!("Let's connect! You can reach me on LinkedIn: {} or check out my GitHub: {}.", c.linkedin, c.github),
                    format!("I'd love to connect with you. Find me on LinkedIn at {} or explore my code on GitHub at {}.", c.linkedin, c.github),
                    format!("For professional inquiries, message me on LinkedIn ({}) or check out my GitHub repositories ({}).", c.linkedin, c.github),
                ]
            }
            Intent::Help => vec![format!(
                "I can tell you about {name}'s education, skills, projects, interests, and contact information. What would you like to know?"
            )],
            Intent::Unknown => vec![
                format!("I'm not entirely sure I understand. Could you try asking about {name}'s education, skills, or projects?"),
                format!("I'm still learning! Try asking about {name}'s professional background, education, or technical skills."),
                format!("That's an interesting question. I'm better equipped to discuss {name}'s professional qualifications and experience."),
            ],
        }
    }
}

fn pick(options: Vec<String>) -> String {
    options.choose(&mut rand::rng()).cloned().unwrap_or_default()
}

#[async_trait]
impl ReplySource for PortfolioBot {
    fn name(&self) -> &'static str {
        "rules"
    }

    async fn reply(&self, message: &str) -> Result<String, ReplySourceError> {
        Ok(self.generate_reply(message))
    }
}
