//! Static data compiled into the binary: the project catalog, the sample
//! ideas and the profile text shown in the home sections.
use chrono::{Duration, Utc};

use crate::{IdeaStatus, Project, ProjectIdea, Tag};

const PEXELS_SUFFIX: &str = "?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2";

fn pexels(photo: u32) -> String {
    format!(
        "https://images.pexels.com/photos/{0}/pexels-photo-{0}.jpeg{1}",
        photo, PEXELS_SUFFIX
    )
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn seed_projects() -> Vec<Project> {
    vec![
        Project {
            id: "agentic-resume-builder".to_string(),
            title: "Agentic AI Resume Builder".to_string(),
            short_description: "ATS-optimized resume generator using LLMs.".to_string(),
            full_description: "ATS-optimized resume generator that personalizes content using LLMs based on job descriptions. The system generates tailored resumes that highlight relevant skills and experiences for specific job applications.".to_string(),
            image: pexels(590016),
            tags: vec![Tag::LangChain, Tag::GenAI, Tag::Hackathon, Tag::Featured, Tag::Nlp],
            tech_stack: strings(&["Python", "LangChain", "OpenAI", "Streamlit", "HuggingFace"]),
            github: Some("https://github.com/SudeshRPatil20/Agentic-Ai-Resume-builder".to_string()),
            demo: Some("https://agentic-ai-resume-builder.streamlit.app/".to_string()),
            youtube: None,
            blog: None,
            is_public: true,
            notes: None,
        },
        Project {
            id: "travel-ai-planner".to_string(),
            title: "Travel AI Planner".to_string(),
            short_description: "Smart itinerary planner using natural language prompts.".to_string(),
            full_description: "An intelligent travel planning application that uses natural language processing to create personalized itineraries based on user preferences, budget constraints, and destination information.".to_string(),
            image: pexels(3935702),
            tags: vec![Tag::Llm, Tag::Hackathon, Tag::WebApp, Tag::GenAI],
            tech_stack: strings(&["Next.js", "TypeScript", "OpenAI API", "Tailwind CSS", "Vercel"]),
            github: Some("https://github.com/SudeshRangaraoPatil/levelsupermind".to_string()),
            demo: Some("https://levelsupermind-q9ffcp1j7-parags-projects-d0af38f7.vercel.app/".to_string()),
            youtube: Some("https://www.youtube.com/watch?v=RRHHwmlU9do".to_string()),
            blog: None,
            is_public: true,
            notes: None,
        },
        Project {
            id: "chatbot-with-langchain".to_string(),
            title: "LangChain Powered Chatbot".to_string(),
            short_description: "Intelligent chatbot built with LangChain framework.".to_string(),
            full_description: "A conversational AI assistant built using the LangChain framework that can understand context, answer questions, and perform various tasks based on user inputs. Integrates with multiple knowledge sources for comprehensive responses.".to_string(),
            image: pexels(8386440),
            tags: vec![Tag::LangChain, Tag::Llm, Tag::Nlp, Tag::GenAI],
            tech_stack: strings(&["Python", "LangChain", "Gradio", "OpenAI", "FastAPI"]),
            github: Some("https://github.com/SudeshRPatil20/langchain-chatbot".to_string()),
            demo: None,
            youtube: None,
            blog: None,
            is_public: true,
            notes: None,
        },
        Project {
            id: "sentiment-analysis".to_string(),
            title: "Social Media Sentiment Analyzer".to_string(),
            short_description: "Real-time sentiment analysis for social media content.".to_string(),
            full_description: "A machine learning application that analyzes sentiment in social media posts and comments in real-time. Uses advanced NLP techniques to classify text as positive, negative, or neutral with high accuracy.".to_string(),
            image: pexels(6214476),
            tags: vec![Tag::Ml, Tag::Nlp, Tag::Featured],
            tech_stack: strings(&["Python", "TensorFlow", "NLTK", "Flask", "React"]),
            github: Some("https://github.com/SudeshRPatil20/sentiment-analysis".to_string()),
            demo: Some("https://sentiment-analyzer-demo.vercel.app".to_string()),
            youtube: None,
            blog: None,
            is_public: true,
            notes: None,
        },
        Project {
            id: "cnn-image-classifier".to_string(),
            title: "CNN Image Classifier".to_string(),
            short_description: "Deep learning model for image classification.".to_string(),
            full_description: "A convolutional neural network (CNN) based image classification system that can accurately identify objects in images. Trained on a large dataset of labeled images and optimized for performance.".to_string(),
            image: pexels(8386434),
            tags: vec![Tag::Dl, Tag::Ml],
            tech_stack: strings(&["Python", "TensorFlow", "Keras", "NumPy", "Matplotlib"]),
            github: Some("https://github.com/SudeshRPatil20/cnn-classifier".to_string()),
            demo: None,
            youtube: None,
            blog: None,
            is_public: true,
            notes: None,
        },
        Project {
            id: "blockchain-hackathon".to_string(),
            title: "BlockBash 2024 Project".to_string(),
            short_description: "Award-winning blockchain solution from Coca-Cola Disrupt.".to_string(),
            full_description: "An innovative blockchain-based solution developed during the BlockBash 2024 hackathon. The project focuses on supply chain transparency and was recognized with the top innovation award at Coca-Cola Disrupt.".to_string(),
            image: pexels(8370752),
            tags: vec![Tag::Hackathon, Tag::Featured],
            tech_stack: strings(&["Solidity", "React", "Web3.js", "Ethereum", "Node.js"]),
            github: Some("https://github.com/SudeshRPatil20/blockbash-2024".to_string()),
            demo: None,
            youtube: Some("https://www.youtube.com/@Blockbash-jb7gt".to_string()),
            blog: None,
            is_public: true,
            notes: None,
        },
    ]
}

/// The two sample ideas, dated 7 and 14 days before now.
pub fn seed_ideas() -> Vec<ProjectIdea> {
    let now = Utc::now();
    vec![
        ProjectIdea {
            id: "1".to_string(),
            title: "Personalized AI Study Assistant".to_string(),
            description: "An AI-powered app that creates personalized study plans based on learning style, goals, and available time. Incorporates spaced repetition and active recall techniques.".to_string(),
            tags: strings(&["Education", "GenAI", "Mobile App"]),
            status: IdeaStatus::Planned,
            created_at: now - Duration::days(7),
        },
        ProjectIdea {
            id: "2".to_string(),
            title: "Predictive Healthcare Analytics".to_string(),
            description: "A system that uses ML to predict potential health issues based on patient history and current vitals. Focus on preventive care and early detection.".to_string(),
            tags: strings(&["Healthcare", "ML", "Python"]),
            status: IdeaStatus::InProgress,
            created_at: now - Duration::days(14),
        },
    ]
}

/// Owner profile shown by the hero, about and contact sections
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub name: &'static str,
    pub headline: &'static str,
    pub about: &'static str,
    pub skills: &'static [&'static str],
    pub email: &'static str,
    pub github: &'static str,
}

pub fn profile() -> Profile {
    Profile {
        name: "Sudesh Patil",
        headline: "AI/ML Developer | LangChain Enthusiast | Backend Explorer",
        about: "B.E. in AI & ML at Modern College of Engineering (2021 - 2025). LevelSuperMind Hackathon finalist with an AI-based social media analytics dashboard built on Langflow and Astra DB.",
        skills: &["Python", "React", "Next.js", "Machine Learning", "Framer Motion"],
        email: "sudeshrpatil20121@gmail.com",
        github: "https://github.com/SudeshRPatil20",
    }
}
