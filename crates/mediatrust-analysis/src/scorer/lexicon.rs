//! Word valences and modifier tables for the rule-based scorer.
//!
//! Valences follow the VADER convention: mean human ratings on a `[-4, 4]`
//! scale. Most entries are taken from the VADER lexicon; a few news-domain
//! words (`record`, `recall` and similar) are added with valences on the
//! same scale. Keys are lowercase single tokens.

pub(crate) const B_INCR: f64 = 0.293;
pub(crate) const B_DECR: f64 = -0.293;
/// Added to a valence (or booster) written in ALL CAPS among mixed-case words.
pub(crate) const C_INCR: f64 = 0.733;
/// Multiplier applied to a negated valence.
pub(crate) const N_SCALAR: f64 = -0.74;

pub(crate) const NEGATE: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "darent", "didnt", "doesnt", "ain't", "aren't",
    "can't", "couldn't", "daren't", "didn't", "doesn't", "dont", "hadnt", "hasnt", "havent",
    "isnt", "mightnt", "mustnt", "neither", "don't", "hadn't", "hasn't", "haven't", "isn't",
    "mightn't", "mustn't", "neednt", "needn't", "never", "none", "nope", "nor", "not", "nothing",
    "nowhere", "oughtnt", "shant", "shouldnt", "uhuh", "wasnt", "werent", "oughtn't", "shan't",
    "shouldn't", "uh-uh", "wasn't", "weren't", "without", "wont", "wouldnt", "won't", "wouldn't",
    "rarely", "seldom", "despite",
];

/// Intensifiers and dampeners. They carry no valence of their own.
pub(crate) const BOOSTERS: &[(&str, f64)] = &[
    ("absolutely", B_INCR),
    ("amazingly", B_INCR),
    ("awfully", B_INCR),
    ("completely", B_INCR),
    ("considerable", B_INCR),
    ("considerably", B_INCR),
    ("decidedly", B_INCR),
    ("deeply", B_INCR),
    ("enormous", B_INCR),
    ("enormously", B_INCR),
    ("entirely", B_INCR),
    ("especially", B_INCR),
    ("exceptional", B_INCR),
    ("exceptionally", B_INCR),
    ("extreme", B_INCR),
    ("extremely", B_INCR),
    ("fabulously", B_INCR),
    ("fully", B_INCR),
    ("greatly", B_INCR),
    ("hella", B_INCR),
    ("highly", B_INCR),
    ("hugely", B_INCR),
    ("incredible", B_INCR),
    ("incredibly", B_INCR),
    ("intensely", B_INCR),
    ("major", B_INCR),
    ("majorly", B_INCR),
    ("more", B_INCR),
    ("most", B_INCR),
    ("particularly", B_INCR),
    ("purely", B_INCR),
    ("quite", B_INCR),
    ("really", B_INCR),
    ("remarkably", B_INCR),
    ("so", B_INCR),
    ("substantially", B_INCR),
    ("thoroughly", B_INCR),
    ("total", B_INCR),
    ("totally", B_INCR),
    ("tremendous", B_INCR),
    ("tremendously", B_INCR),
    ("uber", B_INCR),
    ("unbelievably", B_INCR),
    ("unusually", B_INCR),
    ("utter", B_INCR),
    ("utterly", B_INCR),
    ("very", B_INCR),
    ("almost", B_DECR),
    ("barely", B_DECR),
    ("hardly", B_DECR),
    ("kinda", B_DECR),
    ("kindof", B_DECR),
    ("kind-of", B_DECR),
    ("less", B_DECR),
    ("little", B_DECR),
    ("marginal", B_DECR),
    ("marginally", B_DECR),
    ("occasional", B_DECR),
    ("occasionally", B_DECR),
    ("partly", B_DECR),
    ("scarce", B_DECR),
    ("scarcely", B_DECR),
    ("slight", B_DECR),
    ("slightly", B_DECR),
    ("somewhat", B_DECR),
    ("sorta", B_DECR),
    ("sortof", B_DECR),
    ("sort-of", B_DECR),
];

/// Word valences.
pub(crate) const LEXICON: &[(&str, f64)] = &[
    // Positive
    ("accept", 1.6),
    ("accepted", 1.1),
    ("accomplish", 1.8),
    ("accomplished", 1.9),
    ("achieve", 1.9),
    ("achievement", 2.1),
    ("admire", 2.1),
    ("advantage", 1.0),
    ("agree", 1.5),
    ("agreement", 2.2),
    ("amazing", 2.8),
    ("approve", 2.0),
    ("approved", 1.8),
    ("awesome", 3.1),
    ("beautiful", 2.9),
    ("benefit", 2.0),
    ("benefits", 1.6),
    ("best", 3.2),
    ("better", 1.9),
    ("bold", 1.6),
    ("boost", 1.7),
    ("brave", 2.4),
    ("breakthrough", 2.1),
    ("bright", 1.9),
    ("brilliant", 2.8),
    ("calm", 1.3),
    ("celebrate", 2.7),
    ("celebrated", 2.7),
    ("champion", 2.9),
    ("charming", 2.8),
    ("cheer", 2.3),
    ("clean", 1.7),
    ("clear", 1.6),
    ("comfort", 1.5),
    ("confident", 2.2),
    ("cool", 1.3),
    ("courage", 2.2),
    ("creative", 1.9),
    ("delight", 2.9),
    ("easy", 1.9),
    ("effective", 2.1),
    ("encourage", 2.3),
    ("energetic", 1.9),
    ("enjoy", 2.2),
    ("excellent", 2.7),
    ("excited", 1.4),
    ("exciting", 2.2),
    ("fair", 1.3),
    ("fantastic", 2.6),
    ("favorite", 2.0),
    ("fine", 0.8),
    ("free", 2.3),
    ("freedom", 3.2),
    ("fresh", 1.3),
    ("friendly", 2.2),
    ("fun", 2.3),
    ("gain", 2.4),
    ("gains", 1.8),
    ("generous", 2.3),
    ("glad", 2.0),
    ("good", 1.9),
    ("grand", 2.0),
    ("grateful", 2.0),
    ("great", 3.1),
    ("greater", 1.5),
    ("growth", 1.6),
    ("happy", 2.7),
    ("healthy", 1.7),
    ("help", 1.7),
    ("helpful", 1.8),
    ("hero", 2.6),
    ("honest", 2.3),
    ("hope", 1.9),
    ("hopeful", 1.6),
    ("improve", 1.9),
    ("improved", 2.1),
    ("improvement", 2.0),
    ("innovative", 1.9),
    ("inspire", 2.7),
    ("interesting", 1.7),
    ("joy", 2.8),
    ("kind", 2.4),
    ("laugh", 2.6),
    ("lead", 0.9),
    ("like", 2.0),
    ("love", 3.2),
    ("lucky", 1.8),
    ("nice", 1.8),
    ("ok", 1.2),
    ("optimistic", 1.3),
    ("peace", 2.5),
    ("perfect", 2.7),
    ("pleased", 1.9),
    ("popular", 1.8),
    ("positive", 2.6),
    ("praise", 2.6),
    ("pretty", 2.2),
    ("profit", 1.9),
    ("progress", 1.8),
    ("promise", 1.3),
    ("protect", 1.6),
    ("proud", 2.1),
    ("rally", 1.1),
    ("recover", 1.3),
    ("recovery", 1.4),
    ("relief", 2.1),
    ("record", 0.6),
    ("reward", 2.0),
    ("rich", 2.6),
    ("safe", 1.9),
    ("safety", 1.8),
    ("save", 2.2),
    ("secure", 1.4),
    ("smart", 1.7),
    ("solid", 1.5),
    ("stable", 1.2),
    ("strength", 2.2),
    ("strong", 2.3),
    ("succeed", 2.2),
    ("success", 2.7),
    ("successful", 2.8),
    ("support", 1.7),
    ("surge", 0.8),
    ("thank", 1.5),
    ("thanks", 1.9),
    ("top", 0.8),
    ("triumph", 3.0),
    ("trust", 2.3),
    ("truth", 1.3),
    ("upgrade", 1.4),
    ("useful", 1.9),
    ("valuable", 2.1),
    ("victory", 2.8),
    ("welcome", 2.0),
    ("well", 1.1),
    ("win", 2.8),
    ("winner", 2.8),
    ("winning", 2.4),
    ("wins", 2.7),
    ("wise", 1.8),
    ("won", 2.7),
    ("wonderful", 2.7),
    ("yes", 1.7),
    // Negative
    ("abuse", -3.2),
    ("accident", -2.1),
    ("accused", -1.6),
    ("afraid", -2.2),
    ("aggressive", -0.6),
    ("alarm", -1.4),
    ("anger", -2.7),
    ("angry", -2.3),
    ("annoyed", -1.6),
    ("anxiety", -0.7),
    ("arrest", -1.4),
    ("arrested", -2.1),
    ("attack", -2.1),
    ("attacked", -2.0),
    ("awful", -2.0),
    ("bad", -2.5),
    ("ban", -2.6),
    ("banned", -2.0),
    ("bankrupt", -2.6),
    ("blame", -1.4),
    ("bomb", -2.2),
    ("broke", -1.8),
    ("broken", -2.1),
    ("chaos", -2.7),
    ("cheat", -2.0),
    ("collapse", -2.2),
    ("concern", -1.2),
    ("concerns", -1.1),
    ("conflict", -1.3),
    ("corrupt", -3.0),
    ("corruption", -1.9),
    ("crash", -1.7),
    ("crime", -2.5),
    ("crisis", -3.1),
    ("critical", -1.3),
    ("criticism", -1.9),
    ("cruel", -2.8),
    ("cut", -1.1),
    ("damage", -2.2),
    ("danger", -2.4),
    ("dangerous", -2.1),
    ("dead", -3.3),
    ("death", -2.9),
    ("decline", -1.1),
    ("defeat", -2.0),
    ("delay", -1.3),
    ("deny", -0.4),
    ("destroy", -2.5),
    ("destroyed", -2.7),
    ("destruction", -2.7),
    ("die", -2.9),
    ("died", -2.6),
    ("disaster", -3.1),
    ("disappointed", -1.9),
    ("disappointing", -2.2),
    ("disease", -2.1),
    ("dispute", -1.7),
    ("doubt", -1.5),
    ("drop", -1.1),
    ("fail", -2.5),
    ("failed", -2.3),
    ("failure", -2.3),
    ("fake", -2.1),
    ("false", -1.5),
    ("fear", -2.2),
    ("fears", -1.8),
    ("fight", -1.6),
    ("fire", -1.4),
    ("fraud", -2.8),
    ("hate", -2.7),
    ("hurt", -2.4),
    ("illegal", -2.6),
    ("injured", -1.7),
    ("kill", -3.7),
    ("killed", -3.5),
    ("lawsuit", -0.9),
    ("lie", -1.6),
    ("lies", -1.8),
    ("lose", -1.7),
    ("loss", -1.3),
    ("losses", -1.7),
    ("lost", -1.3),
    ("murder", -3.7),
    ("no", -1.2),
    ("outrage", -2.3),
    ("pain", -2.3),
    ("panic", -1.9),
    ("poor", -2.1),
    ("problem", -1.7),
    ("problems", -1.7),
    ("protest", -1.0),
    ("recall", -0.4),
    ("recession", -1.8),
    ("reject", -1.7),
    ("rejected", -2.3),
    ("risk", -1.1),
    ("risks", -1.1),
    ("sad", -2.1),
    ("scandal", -1.9),
    ("scared", -1.9),
    ("shock", -1.6),
    ("shocking", -1.7),
    ("slump", -1.5),
    ("sorry", -0.3),
    ("struggle", -1.3),
    ("stupid", -2.4),
    ("suffer", -2.5),
    ("suspect", -1.2),
    ("terrible", -2.1),
    ("terror", -3.0),
    ("threat", -2.4),
    ("threaten", -2.3),
    ("trouble", -1.7),
    ("ugly", -2.3),
    ("unfair", -2.1),
    ("violence", -3.1),
    ("victim", -1.8),
    ("war", -2.9),
    ("warn", -0.4),
    ("warning", -1.4),
    ("weak", -1.9),
    ("worried", -1.2),
    ("worry", -1.9),
    ("worse", -2.1),
    ("worst", -3.1),
    ("wrong", -2.1),
];
