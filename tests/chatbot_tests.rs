use portfolio_chatbot::services::chatbot::{
    Intent, PortfolioBot, correct_spelling, detect_intent, time_of_day_greeting,
};
use portfolio_chatbot::services::profile::Profile;
use portfolio_chatbot::services::reply_source::ReplySource;

fn bot() -> PortfolioBot {
    PortfolioBot::new(Profile::builtin().unwrap())
}

#[test]
fn test_detect_intent() {
    assert_eq!(detect_intent("Hello!"), Intent::Greeting);
    assert_eq!(detect_intent("hey there"), Intent::Greeting);
    assert_eq!(detect_intent("ok, bye"), Intent::Farewell);
    assert_eq!(detect_intent("see you"), Intent::Farewell);
    assert_eq!(detect_intent("name?"), Intent::Name);
    assert_eq!(detect_intent("your name"), Intent::Name);
    assert_eq!(detect_intent("hometown"), Intent::Hometown);
    assert_eq!(detect_intent("based?"), Intent::CurrentLocation);
    assert_eq!(detect_intent("education"), Intent::Education);
    assert_eq!(detect_intent("hobby"), Intent::Interests);
    assert_eq!(detect_intent("languages"), Intent::Languages);
    assert_eq!(detect_intent("skills"), Intent::Skills);
    assert_eq!(detect_intent("tools"), Intent::Tools);
    assert_eq!(detect_intent("Projects"), Intent::Project);
    assert_eq!(detect_intent("contact"), Intent::Contact);
    assert_eq!(detect_intent("help"), Intent::Help);
    assert_eq!(detect_intent("random text"), Intent::Unknown);
}

#[test]
fn test_greeting_needs_whole_word() {
    // "hi" inside "this" and "bye" inside "byeways" do not count
    assert_eq!(detect_intent("this"), Intent::Unknown);
    assert_eq!(detect_intent("byeways"), Intent::Unknown);
    assert_eq!(detect_intent("Hi!"), Intent::Greeting);
    assert_eq!(detect_intent("good-bye"), Intent::Farewell);
}

#[test]
fn test_punctuation_is_ignored() {
    assert_eq!(detect_intent("  NAME?!  "), Intent::Name);
    assert_eq!(detect_intent("contact..."), Intent::Contact);
}

#[test]
fn test_correction_keeps_first_letter() {
    assert_eq!(correct_spelling("walk"), "walk");
    assert_eq!(detect_intent("walk"), Intent::Unknown);
    assert_eq!(correct_spelling("talks"), "talk");
    assert_eq!(detect_intent("talks"), Intent::Languages);
}

#[test]
fn test_long_sentences_fall_back_to_default() {
    // The keyword must dominate the message to clear the confidence bar.
    assert_eq!(
        detect_intent("could you please tell me something about the weather on mars and your name"),
        Intent::Unknown
    );
}

#[test]
fn test_spelling_correction() {
    assert_eq!(correct_spelling("projcts"), "project");
    assert_eq!(correct_spelling("educaton"), "education");
    assert_eq!(correct_spelling("linkedin"), "linkedin");
    // short words are left alone
    assert_eq!(correct_spelling("me too"), "me too");
    assert_eq!(detect_intent("skils"), Intent::Skills);
}

#[test]
fn test_time_of_day_greeting() {
    assert_eq!(time_of_day_greeting(0), "Good morning!");
    assert_eq!(time_of_day_greeting(11), "Good morning!");
    assert_eq!(time_of_day_greeting(12), "Good afternoon!");
    assert_eq!(time_of_day_greeting(16), "Good afternoon!");
    assert_eq!(time_of_day_greeting(17), "Good evening!");
    assert_eq!(time_of_day_greeting(23), "Good evening!");
}

#[test]
fn test_replies_come_from_candidates() {
    let bot = bot();
    for (message, intent) in [
        ("Hello!", Intent::Greeting),
        ("project", Intent::Project),
        ("random text", Intent::Unknown),
    ] {
        let reply = bot.generate_reply(message);
        assert!(
            bot.candidates(intent).contains(&reply),
            "unexpected reply for {message:?}: {reply}"
        );
    }
}

#[test]
fn test_replies_carry_profile_facts() {
    let bot = bot();
    let profile = bot.profile().clone();

    for reply in bot.candidates(Intent::Hometown) {
        assert!(reply.contains(&profile.location.hometown));
    }
    for reply in bot.candidates(Intent::Project) {
        assert!(reply.contains("Exquio"));
    }
    for reply in bot.candidates(Intent::Contact) {
        assert!(reply.contains(&profile.contact.linkedin));
        assert!(reply.contains(&profile.contact.github));
    }
    for reply in bot.candidates(Intent::Tools) {
        assert!(reply.contains(", and Git"));
    }
}

#[test]
fn test_help_reply_lists_topics() {
    let reply = bot().generate_reply("help");
    assert!(reply.contains("education, skills, projects"));
}

#[tokio::test]
async fn test_rule_bot_as_reply_source() {
    let bot = bot();
    assert_eq!(bot.name(), "rules");
    let reply = bot.reply("Hello!").await.unwrap();
    assert!(!reply.is_empty());
}
