// src/catalog.rs
//
// Catálogo estático de questões-modelo por nível CEFR e habilidade, usado
// apenas na semeadura inicial do banco de questões.

pub struct ModeloQuestao {
    pub titulo: &'static str,
    pub enunciado: &'static str,
    // Vazio quando a questão não traz texto de apoio
    pub texto: &'static str,
    // None apenas em questões dissertativas (Writing)
    pub alternativas: Option<&'static [&'static str]>,
    pub resposta_correta: Option<i64>,
    pub explicacao: &'static str,
}

// nivel -> (habilidade -> questões)
pub const MODELOS_QUESTOES: &[(&str, &[(&str, &[ModeloQuestao])])] = &[
    (
        "A1",
        &[
            (
                "Reading",
                &[ModeloQuestao {
                    titulo: "Simple Present - Daily Routine",
                    enunciado: "Read the text and answer the question:",
                    texto: "Tom wakes up at 7 AM every day. He eats breakfast at 8 AM and goes to work at 9 AM.",
                    alternativas: Some(&["At 7 AM", "At 8 AM", "At 9 AM", "At 10 AM"]),
                    resposta_correta: Some(0),
                    explicacao: "The text says \"Tom wakes up at 7 AM every day\"",
                }],
            ),
            (
                "Grammar",
                &[ModeloQuestao {
                    titulo: "Present Simple - Basic",
                    enunciado: "Choose the correct verb form:",
                    texto: "She _____ to school every day.",
                    alternativas: Some(&["go", "goes", "going", "went"]),
                    resposta_correta: Some(1),
                    explicacao: "Third person singular adds -s to the verb in present simple.",
                }],
            ),
            (
                "Vocabulary",
                &[ModeloQuestao {
                    titulo: "Family Members",
                    enunciado: "What do you call your father's brother?",
                    texto: "",
                    alternativas: Some(&["Cousin", "Uncle", "Nephew", "Grandfather"]),
                    resposta_correta: Some(1),
                    explicacao: "Your father's brother is your uncle.",
                }],
            ),
        ],
    ),
    (
        "A2",
        &[
            (
                "Reading",
                &[ModeloQuestao {
                    titulo: "Shopping Experience",
                    enunciado: "Read the text and answer:",
                    texto: "Maria went to the supermarket yesterday. She bought milk, bread, and fruits. The total was $25.",
                    alternativas: Some(&["$20", "$25", "$30", "$35"]),
                    resposta_correta: Some(1),
                    explicacao: "The text clearly states \"The total was $25\".",
                }],
            ),
            (
                "Grammar",
                &[ModeloQuestao {
                    titulo: "Past Simple - Regular Verbs",
                    enunciado: "Complete with the correct past form:",
                    texto: "Yesterday, I _____ (walk) to the park.",
                    alternativas: Some(&["walk", "walks", "walked", "walking"]),
                    resposta_correta: Some(2),
                    explicacao: "Regular verbs add -ed for past simple.",
                }],
            ),
        ],
    ),
    (
        "B1",
        &[
            (
                "Reading",
                &[ModeloQuestao {
                    titulo: "Environmental Issues",
                    enunciado: "According to the text, what is the main environmental concern?",
                    texto: "Climate change is affecting weather patterns worldwide. Scientists warn that rising temperatures may lead to more extreme weather events.",
                    alternativas: Some(&["Air pollution", "Climate change", "Water shortage", "Deforestation"]),
                    resposta_correta: Some(1),
                    explicacao: "The text focuses on climate change and its effects.",
                }],
            ),
            (
                "Grammar",
                &[ModeloQuestao {
                    titulo: "Conditional Type 1",
                    enunciado: "Choose the correct conditional form:",
                    texto: "If it _____ tomorrow, we will go to the beach.",
                    alternativas: Some(&["is sunny", "will be sunny", "was sunny", "were sunny"]),
                    resposta_correta: Some(0),
                    explicacao: "First conditional: If + present simple, will + base verb.",
                }],
            ),
        ],
    ),
    (
        "B2",
        &[
            (
                "Reading",
                &[ModeloQuestao {
                    titulo: "Technology Impact",
                    enunciado: "What does the author suggest about social media?",
                    texto: "While social media connects people globally, it also raises concerns about privacy and the quality of interpersonal relationships.",
                    alternativas: Some(&[
                        "It only has positive effects",
                        "It has both positive and negative aspects",
                        "It should be banned",
                        "It is completely safe",
                    ]),
                    resposta_correta: Some(1),
                    explicacao: "The text presents both benefits (connects people) and concerns (privacy, relationships).",
                }],
            ),
            (
                "Grammar",
                &[ModeloQuestao {
                    titulo: "Passive Voice",
                    enunciado: "Choose the correct passive form:",
                    texto: "The book _____ by many students every year.",
                    alternativas: Some(&["reads", "is read", "was read", "has read"]),
                    resposta_correta: Some(1),
                    explicacao: "Present passive: is/am/are + past participle.",
                }],
            ),
        ],
    ),
    (
        "B2+",
        &[
            (
                "Reading",
                &[ModeloQuestao {
                    titulo: "Economic Globalization",
                    enunciado: "What is the author's main argument about globalization?",
                    texto: "Globalization has created unprecedented economic interdependence, but it has also exacerbated inequality within and between nations, requiring careful policy intervention.",
                    alternativas: Some(&[
                        "It only benefits rich countries",
                        "It creates both opportunities and challenges",
                        "It should be completely reversed",
                        "It has no negative effects",
                    ]),
                    resposta_correta: Some(1),
                    explicacao: "The text acknowledges both benefits (economic interdependence) and problems (inequality).",
                }],
            ),
            (
                "Writing",
                &[ModeloQuestao {
                    titulo: "Opinion Essay",
                    enunciado: "Write an essay (200-250 words) discussing whether smartphones should be banned in schools.",
                    texto: "Provide arguments for and against, and give your opinion.",
                    alternativas: None,
                    resposta_correta: None,
                    explicacao: "Essay should have clear structure: introduction, body paragraphs, conclusion.",
                }],
            ),
        ],
    ),
];
