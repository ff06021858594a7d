//! Built-in lexicon, contraction patterns and structural rewrites.

use crate::entry::RuleEntry;
use crate::error::RuleError;
use crate::structural::Structural;
use crate::style::Style::{self, *};
use crate::table::RuleTable;

type Choices = &'static [(Style, &'static [&'static str])];

/// Single words, keyed lowercase.
const LEXICON: &[(&str, Choices)] = &[
    ("good", &[
        (Standard, &["fine", "great", "solid"]),
        (Formal, &["excellent", "favorable"]),
        (Casual, &["cool", "awesome"]),
        (Simplified, &["fine"]),
        (Creative, &["splendid", "stellar"]),
        (Academic, &["favorable", "satisfactory"]),
    ]),
    ("bad", &[
        (Standard, &["poor", "awful"]),
        (Formal, &["unfavorable", "inadequate"]),
        (Casual, &["lousy", "rough"]),
        (Simplified, &["poor"]),
        (Creative, &["dismal", "dreadful"]),
        (Academic, &["deficient", "inadequate"]),
    ]),
    ("big", &[
        (Standard, &["large", "huge"]),
        (Formal, &["substantial", "considerable"]),
        (Casual, &["huge"]),
        (Simplified, &["large"]),
        (Creative, &["enormous", "towering"]),
        (Academic, &["substantial", "considerable"]),
    ]),
    ("small", &[
        (Standard, &["little", "tiny"]),
        (Formal, &["modest", "minor"]),
        (Casual, &["tiny", "little"]),
        (Simplified, &["little"]),
        (Creative, &["minuscule", "petite"]),
        (Academic, &["limited", "modest"]),
    ]),
    ("important", &[
        (Standard, &["key", "crucial"]),
        (Formal, &["significant", "essential"]),
        (Casual, &["big"]),
        (Simplified, &["key"]),
        (Creative, &["vital", "pivotal"]),
        (Academic, &["significant", "critical"]),
    ]),
    ("use", &[
        (Standard, &["employ"]),
        (Formal, &["employ", "utilize"]),
        (Casual, &["go with"]),
        (Academic, &["employ", "utilize"]),
    ]),
    ("utilize", &[
        (Standard, &["use"]),
        (Casual, &["use"]),
        (Simplified, &["use"]),
        (Creative, &["harness"]),
    ]),
    ("help", &[
        (Standard, &["assist", "aid"]),
        (Formal, &["assist", "support"]),
        (Casual, &["give a hand"]),
        (Creative, &["lend a hand"]),
        (Academic, &["facilitate", "support"]),
    ]),
    ("get", &[
        (Standard, &["obtain", "receive"]),
        (Formal, &["obtain", "acquire"]),
        (Casual, &["grab"]),
        (Academic, &["obtain", "acquire"]),
    ]),
    ("buy", &[
        (Standard, &["purchase"]),
        (Formal, &["purchase", "acquire"]),
        (Casual, &["pick up"]),
        (Creative, &["snap up"]),
    ]),
    ("start", &[
        (Standard, &["begin"]),
        (Formal, &["commence", "initiate"]),
        (Casual, &["kick off"]),
        (Simplified, &["begin"]),
        (Creative, &["launch", "spark"]),
        (Academic, &["initiate", "commence"]),
    ]),
    ("end", &[
        (Standard, &["finish"]),
        (Formal, &["conclude", "terminate"]),
        (Casual, &["wrap up"]),
        (Simplified, &["stop"]),
        (Creative, &["close"]),
        (Academic, &["conclude"]),
    ]),
    ("think", &[
        (Standard, &["believe", "feel"]),
        (Formal, &["believe", "consider"]),
        (Casual, &["reckon", "figure"]),
        (Creative, &["imagine", "suspect"]),
        (Academic, &["posit", "contend"]),
    ]),
    ("hello", &[
        (Standard, &["hi"]),
        (Formal, &["greetings"]),
        (Casual, &["hey"]),
    ]),
    ("hi", &[
        (Formal, &["greetings", "hello"]),
        (Casual, &["hey"]),
    ]),
    ("many", &[
        (Standard, &["numerous"]),
        (Formal, &["numerous", "countless"]),
        (Casual, &["tons of", "lots of"]),
        (Creative, &["countless", "myriad"]),
        (Academic, &["numerous", "a multitude of"]),
    ]),
    ("very", &[
        (Standard, &["really", "quite"]),
        (Formal, &["highly", "exceedingly"]),
        (Casual, &["super", "really"]),
        (Simplified, &["really"]),
        (Creative, &["remarkably", "incredibly"]),
        (Academic, &["considerably", "highly"]),
    ]),
    ("also", &[
        (Formal, &["additionally"]),
        (Academic, &["additionally"]),
    ]),
    ("because", &[
        (Standard, &["since", "as"]),
        (Formal, &["since", "as"]),
        (Casual, &["'cause", "since"]),
        (Creative, &["since"]),
        (Academic, &["since", "given that"]),
    ]),
    ("need", &[
        (Standard, &["require"]),
        (Formal, &["require"]),
        (Academic, &["require", "necessitate"]),
    ]),
    ("try", &[
        (Standard, &["attempt"]),
        (Formal, &["attempt", "endeavor"]),
        (Academic, &["attempt"]),
    ]),
    ("easy", &[
        (Standard, &["simple"]),
        (Formal, &["straightforward", "effortless"]),
        (Casual, &["simple"]),
        (Simplified, &["simple"]),
        (Creative, &["effortless"]),
        (Academic, &["straightforward"]),
    ]),
    ("hard", &[
        (Standard, &["tough", "difficult"]),
        (Formal, &["difficult", "challenging"]),
        (Casual, &["tough"]),
        (Simplified, &["tough"]),
        (Creative, &["grueling"]),
        (Academic, &["challenging", "arduous"]),
    ]),
    ("difficult", &[
        (Standard, &["hard", "tough"]),
        (Formal, &["challenging", "demanding"]),
        (Casual, &["tough"]),
        (Simplified, &["hard"]),
        (Creative, &["grueling"]),
        (Academic, &["challenging", "arduous"]),
    ]),
    ("fast", &[
        (Standard, &["quick", "rapid"]),
        (Formal, &["rapid", "swift"]),
        (Casual, &["quick", "speedy"]),
        (Simplified, &["quick"]),
        (Creative, &["lightning-fast", "swift"]),
        (Academic, &["rapid"]),
    ]),
    ("happy", &[
        (Standard, &["glad", "pleased"]),
        (Formal, &["pleased", "content"]),
        (Casual, &["stoked", "thrilled"]),
        (Simplified, &["glad"]),
        (Creative, &["joyful", "elated"]),
        (Academic, &["content", "satisfied"]),
    ]),
    ("sad", &[
        (Standard, &["unhappy", "down"]),
        (Formal, &["sorrowful", "unhappy"]),
        (Casual, &["bummed", "down"]),
        (Simplified, &["unhappy"]),
        (Creative, &["melancholy", "forlorn"]),
        (Academic, &["dejected"]),
    ]),
    ("maybe", &[
        (Standard, &["perhaps", "possibly"]),
        (Formal, &["perhaps", "possibly"]),
        (Creative, &["perchance"]),
        (Academic, &["possibly", "conceivably"]),
    ]),
    ("however", &[
        (Standard, &["still"]),
        (Formal, &["nevertheless", "nonetheless"]),
        (Casual, &["still", "though"]),
        (Academic, &["nevertheless", "conversely"]),
    ]),
    ("therefore", &[
        (Standard, &["so", "thus"]),
        (Formal, &["consequently", "thus"]),
        (Casual, &["so"]),
        (Simplified, &["so"]),
        (Academic, &["consequently", "hence"]),
    ]),
    ("approximately", &[
        (Standard, &["about", "roughly"]),
        (Casual, &["about", "around"]),
        (Simplified, &["about"]),
        (Creative, &["roughly"]),
    ]),
    ("demonstrate", &[
        (Standard, &["show"]),
        (Formal, &["illustrate"]),
        (Casual, &["show"]),
        (Simplified, &["show"]),
        (Academic, &["illustrate", "establish"]),
    ]),
    ("show", &[
        (Formal, &["demonstrate", "display"]),
        (Creative, &["reveal"]),
        (Academic, &["demonstrate", "indicate"]),
    ]),
    ("purchase", &[
        (Standard, &["buy"]),
        (Casual, &["buy"]),
        (Simplified, &["buy"]),
        (Creative, &["acquire"]),
    ]),
    ("commence", &[
        (Standard, &["begin", "start"]),
        (Casual, &["start"]),
        (Simplified, &["start"]),
    ]),
    ("additionally", &[
        (Standard, &["also"]),
        (Casual, &["plus", "also"]),
        (Simplified, &["also"]),
    ]),
    ("numerous", &[
        (Standard, &["many"]),
        (Casual, &["lots of"]),
        (Simplified, &["many"]),
    ]),
    ("assist", &[
        (Standard, &["help"]),
        (Casual, &["help"]),
        (Simplified, &["help"]),
    ]),
    ("obtain", &[
        (Standard, &["get"]),
        (Casual, &["get"]),
        (Simplified, &["get"]),
    ]),
    ("kids", &[
        (Standard, &["children"]),
        (Formal, &["children"]),
        (Academic, &["children"]),
    ]),
    ("nice", &[
        (Standard, &["pleasant", "lovely"]),
        (Formal, &["pleasant", "agreeable"]),
        (Casual, &["sweet", "cool"]),
        (Simplified, &["kind"]),
        (Creative, &["delightful", "charming"]),
        (Academic, &["agreeable"]),
    ]),
    ("smart", &[
        (Standard, &["clever", "bright"]),
        (Formal, &["intelligent", "astute"]),
        (Casual, &["sharp"]),
        (Simplified, &["clever"]),
        (Creative, &["brilliant", "sharp-witted"]),
        (Academic, &["intelligent", "astute"]),
    ]),
    ("problem", &[
        (Standard, &["issue"]),
        (Formal, &["issue", "difficulty"]),
        (Casual, &["hassle", "snag"]),
        (Creative, &["puzzle", "hurdle"]),
        (Academic, &["issue", "challenge"]),
    ]),
    ("okay", &[
        (Formal, &["acceptable", "satisfactory"]),
        (Academic, &["acceptable"]),
    ]),
];

/// Multi-word phrases, matched across any whitespace.
const PHRASES: &[(&str, Choices)] = &[
    ("in order to", &[
        (Standard, &["to"]),
        (Formal, &["so as to"]),
        (Casual, &["to"]),
        (Simplified, &["to"]),
    ]),
    ("due to the fact that", &[
        (Standard, &["because", "since"]),
        (Formal, &["because", "given that"]),
        (Casual, &["since", "'cause"]),
        (Simplified, &["because"]),
        (Academic, &["given that", "since"]),
    ]),
    ("a lot of", &[
        (Standard, &["many", "plenty of"]),
        (Formal, &["a great deal of", "numerous"]),
        (Casual, &["tons of", "loads of"]),
        (Simplified, &["many"]),
        (Creative, &["a wealth of"]),
        (Academic, &["a substantial amount of", "numerous"]),
    ]),
    ("at this point in time", &[
        (Standard, &["now", "currently"]),
        (Formal, &["currently", "at present"]),
        (Casual, &["right now"]),
        (Simplified, &["now"]),
        (Academic, &["at present", "currently"]),
    ]),
    ("in conclusion", &[
        (Standard, &["to sum up"]),
        (Formal, &["in summary", "to conclude"]),
        (Casual, &["all in all"]),
        (Simplified, &["to sum up"]),
        (Creative, &["ultimately"]),
        (Academic, &["in summary", "to conclude"]),
    ]),
    ("kind of", &[
        (Standard, &["somewhat"]),
        (Formal, &["somewhat"]),
        (Academic, &["somewhat", "rather"]),
    ]),
    ("a little bit", &[
        (Standard, &["slightly", "a bit"]),
        (Formal, &["slightly"]),
        (Casual, &["a tad"]),
        (Academic, &["marginally"]),
    ]),
];

const EXPANDING: &[Style] = &[Standard, Formal, Academic, Simplified];
const FORMAL_ONLY: &[Style] = &[Formal, Academic];

/// Contraction and slang patterns as `(id, regex, styles, templates)`.
const PATTERNS: &[(&str, &str, &[Style], &[&str])] = &[
    ("expand-cant", r"(?i)\bcan['’]t\b", EXPANDING, &["cannot"]),
    ("expand-wont", r"(?i)\bwon['’]t\b", EXPANDING, &["will not"]),
    (
        "expand-nt",
        r"(?i)\b(do|does|did|is|are|was|were|has|have|had|could|should|would|must|need)n['’]t\b",
        EXPANDING,
        &["$1 not"],
    ),
    ("expand-re", r"(?i)\b(you|we|they|who)['’]re\b", FORMAL_ONLY, &["$1 are"]),
    ("expand-ll", r"(?i)\b(i|you|he|she|it|we|they)['’]ll\b", FORMAL_ONLY, &["$1 will"]),
    ("expand-ve", r"(?i)\b(i|you|we|they|could|should|would)['’]ve\b", FORMAL_ONLY, &["$1 have"]),
    ("expand-im", r"(?i)\bi['’]m\b", FORMAL_ONLY, &["I am"]),
    ("expand-s", r"(?i)\b(it|that|there|here|what|he|she)['’]s\b", FORMAL_ONLY, &["$1 is"]),
    (
        "contract-not",
        r"(?i)\b(do|does|did|is|are|was|were|has|have|had|could|should|would) not\b",
        &[Casual],
        &["${1}n't"],
    ),
    ("contract-cannot", r"(?i)\bcan ?not\b", &[Casual], &["can't"]),
    ("contract-will-not", r"(?i)\bwill not\b", &[Casual], &["won't"]),
    ("contract-it-is", r"(?i)\b(it|that|there|what) is\b", &[Casual], &["${1}'s"]),
    ("contract-i-am", r"(?i)\bi am\b", &[Casual], &["I'm"]),
    ("contract-are", r"(?i)\b(they|we|you) are\b", &[Casual], &["${1}'re"]),
    ("contract-will", r"(?i)\b(i|you|he|she|we|they) will\b", &[Casual], &["${1}'ll"]),
    ("simplify-utilize", r"(?i)\butiliz(e|es|ed|ing)\b", &[Standard, Simplified], &["us$1"]),
    ("formalize-gonna", r"(?i)\bgonna\b", EXPANDING, &["going to"]),
    ("formalize-wanna", r"(?i)\bwanna\b", EXPANDING, &["want to"]),
    ("formalize-gotta", r"(?i)\bgotta\b", EXPANDING, &["have to"]),
];

/// Connectives opening a non-initial sentence, per style.
const CONNECTIVES: Choices = &[
    (Standard, &["Also,", "In addition,"]),
    (Formal, &["Moreover,", "Furthermore,", "Additionally,"]),
    (Casual, &["Plus,", "On top of that,", "Also,"]),
    (Simplified, &["Also,"]),
    (Creative, &["Interestingly,", "Remarkably,", "What's more,"]),
    (Academic, &["Furthermore,", "Moreover,", "Notably,", "It is worth noting that"]),
];

const NO_PHRASE: &[&str] = &[];

const STRUCTURAL: &[(&str, Structural, Choices)] = &[
    ("invert-clauses", Structural::InvertClauses, &[
        (Standard, NO_PHRASE),
        (Formal, NO_PHRASE),
        (Casual, NO_PHRASE),
        (Creative, NO_PHRASE),
        (Academic, NO_PHRASE),
    ]),
    ("flip-voice", Structural::FlipVoice, &[
        (Standard, NO_PHRASE),
        (Formal, NO_PHRASE),
        (Creative, NO_PHRASE),
        (Academic, NO_PHRASE),
    ]),
    ("insert-connective", Structural::InsertConnective, CONNECTIVES),
];

fn owned(choices: Choices) -> impl Iterator<Item = (Style, impl Iterator<Item = &'static str>)> {
    choices
        .iter()
        .map(|(style, list)| (*style, list.iter().copied()))
}

/// Every built-in rule, in table order.
pub fn builtin_entries() -> Result<Vec<RuleEntry>, RuleError> {
    let mut entries = Vec::with_capacity(LEXICON.len() + PHRASES.len() + PATTERNS.len() + 3);
    for (word, choices) in LEXICON {
        entries.push(RuleEntry::literal(format!("word:{word}"), word, owned(choices))?);
    }
    for (phrase, choices) in PHRASES {
        let id = format!("phrase:{}", phrase.replace(' ', "-"));
        entries.push(RuleEntry::literal(id, phrase, owned(choices))?);
    }
    for (id, pattern, styles, templates) in PATTERNS {
        let replacements = styles
            .iter()
            .map(|style| (*style, templates.iter().copied()));
        entries.push(RuleEntry::pattern(*id, pattern, replacements)?);
    }
    for (id, kind, choices) in STRUCTURAL {
        entries.push(RuleEntry::structural(*id, *kind, owned(choices))?);
    }
    Ok(entries)
}

pub(crate) fn builtin_table() -> Result<RuleTable, RuleError> {
    RuleTable::new(builtin_entries()?)
}
