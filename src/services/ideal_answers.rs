use std::collections::HashMap;
use std::sync::OnceLock;

const IDEAL_ANSWERS: &[(&str, &str)] = &[
    (
        "What is REST API?",
        "A REST API is an interface that allows communication between client and server using standard HTTP methods.",
    ),
    (
        "What is machine learning?",
        "Machine learning is a field of artificial intelligence where algorithms learn patterns from data to build a model that makes predictions without being explicitly programmed.",
    ),
    (
        "What is overfitting?",
        "Overfitting happens when a model learns the noise in the training data instead of the underlying pattern, so it performs well on training data but poorly on unseen data.",
    ),
    (
        "What is the difference between a process and a thread?",
        "A process is an independent program in execution with its own memory space, while a thread is a lightweight unit of execution inside a process that shares memory with other threads of the same process.",
    ),
    (
        "What is a binary search?",
        "Binary search is an algorithm that finds a target in a sorted array by repeatedly halving the search interval, giving logarithmic time complexity.",
    ),
    (
        "What is the OSI model?",
        "The OSI model is a seven layer conceptual model that standardizes network communication: physical, data link, network, transport, session, presentation and application.",
    ),
    (
        "What are Python decorators?",
        "A decorator is a function that takes another function and extends its behavior without modifying it, applied with the @ syntax above a function definition.",
    ),
    (
        "Tell me about yourself.",
        "I am a software engineer with experience building data driven applications. I enjoy solving problems, learning new technologies and working with teams to deliver reliable products.",
    ),
];

static TABLE: OnceLock<HashMap<String, &'static str>> = OnceLock::new();

pub fn normalize_question(question: &str) -> String {
    question.trim().to_lowercase()
}

fn table() -> &'static HashMap<String, &'static str> {
    TABLE.get_or_init(|| {
        IDEAL_ANSWERS
            .iter()
            .map(|(question, answer)| (normalize_question(question), *answer))
            .collect()
    })
}

pub fn ideal_answer(question: &str) -> Option<&'static str> {
    table().get(&normalize_question(question)).copied()
}
