use crate::error::Result;
use crate::models::Template;
use crate::repositories::TemplateRepository;

/// Insert the built-in templates unless any are already present.
///
/// Idempotent: a single existing builtin-flagged record skips the whole
/// pass, and existing templates are never updated even if the definitions
/// here change. Inserts are independent; one failure does not abort the
/// rest.
pub async fn seed_builtin_templates(templates: &TemplateRepository) -> Result<()> {
    let existing = templates.count_builtin().await?;
    if existing > 0 {
        tracing::info!("Found {} existing built-in templates", existing);
        return Ok(());
    }

    for template in builtin_templates() {
        match templates.insert_template(&template).await {
            Ok(()) => tracing::info!("Inserted template: {}", template.name),
            Err(e) => tracing::error!("Failed to insert template {}: {}", template.name, e),
        }
    }

    tracing::info!("Built-in template initialization completed");
    Ok(())
}

/// The fixed set of templates shipped with the editor
pub fn builtin_templates() -> Vec<Template> {
    vec![
        Template::builtin(
            "template_article",
            "Academic Article",
            "Standard academic article format with abstract, sections, and bibliography",
            "academic",
            ARTICLE_CONTENT,
        ),
        Template::builtin(
            "template_report",
            "Business Report",
            "Professional business report template with executive summary",
            "business",
            REPORT_CONTENT,
        ),
        Template::builtin(
            "template_presentation",
            "Presentation Slides",
            "LaTeX Beamer presentation template",
            "presentation",
            PRESENTATION_CONTENT,
        ),
        Template::builtin(
            "template_math",
            "Mathematical Document",
            "Template for mathematical proofs and theorems",
            "academic",
            MATH_CONTENT,
        ),
        Template::builtin(
            "template_letter",
            "Formal Letter",
            "Professional letter template",
            "business",
            LETTER_CONTENT,
        ),
    ]
}

const ARTICLE_CONTENT: &str = r#"\documentclass[12pt]{article}
\usepackage[utf8]{inputenc}
\usepackage{amsmath}
\usepackage{amsfonts}
\usepackage{amssymb}
\usepackage{geometry}
\geometry{margin=1in}

\title{Your Title Here}
\author{Your Name}
\date{\today}

\begin{document}

\maketitle

\begin{abstract}
Your abstract goes here. This should be a brief summary of your work.
\end{abstract}

\section{Introduction}
Your introduction content goes here.

\section{Methodology}
Describe your methodology here.

\section{Results}
Present your results here.

\section{Conclusion}
Your conclusions go here.

\bibliographystyle{plain}
\bibliography{references}

\end{document}"#;

const REPORT_CONTENT: &str = r#"\documentclass[12pt]{report}
\usepackage[utf8]{inputenc}
\usepackage{geometry}
\usepackage{graphicx}
\usepackage{fancyhdr}
\geometry{margin=1in}

\pagestyle{fancy}
\fancyhf{}
\rhead{\thepage}
\lhead{Business Report}

\title{Business Report Title}
\author{Company Name}
\date{\today}

\begin{document}

\maketitle

\chapter{Executive Summary}
Provide a high-level overview of the report findings and recommendations.

\chapter{Introduction}
Introduce the purpose and scope of this report.

\chapter{Analysis}
Present your detailed analysis here.

\chapter{Recommendations}
Provide actionable recommendations based on your analysis.

\chapter{Conclusion}
Summarize the key points and next steps.

\end{document}"#;

const PRESENTATION_CONTENT: &str = r#"\documentclass{beamer}
\usetheme{Madrid}
\usecolortheme{default}

\title{Your Presentation Title}
\author{Your Name}
\institute{Your Institution}
\date{\today}

\begin{document}

\frame{\titlepage}

\begin{frame}
\frametitle{Outline}
\tableofcontents
\end{frame}

\section{Introduction}
\begin{frame}
\frametitle{Introduction}
\begin{itemize}
    \item First point
    \item Second point
    \item Third point
\end{itemize}
\end{frame}

\section{Main Content}
\begin{frame}
\frametitle{Main Point}
Your main content goes here.
\end{frame}

\section{Conclusion}
\begin{frame}
\frametitle{Conclusion}
\begin{itemize}
    \item Summary point 1
    \item Summary point 2
    \item Thank you!
\end{itemize}
\end{frame}

\end{document}"#;

const MATH_CONTENT: &str = r#"\documentclass[12pt]{article}
\usepackage[utf8]{inputenc}
\usepackage{amsmath}
\usepackage{amsthm}
\usepackage{amssymb}
\usepackage{geometry}
\geometry{margin=1in}

\newtheorem{theorem}{Theorem}
\newtheorem{lemma}{Lemma}
\newtheorem{corollary}{Corollary}
\newtheorem{definition}{Definition}

\title{Mathematical Document}
\author{Your Name}
\date{\today}

\begin{document}

\maketitle

\section{Introduction}
This document demonstrates mathematical typesetting in LaTeX.

\begin{definition}
A function $f: \mathbb{R} \to \mathbb{R}$ is continuous at $x = a$ if...
\end{definition}

\begin{theorem}
For any continuous function $f$ on $[a,b]$, we have:
\begin{equation}
\int_a^b f(x) dx = F(b) - F(a)
\end{equation}
where $F$ is an antiderivative of $f$.
\end{theorem}

\begin{proof}
The proof follows from the Fundamental Theorem of Calculus...
\end{proof}

\section{Examples}
\begin{align}
\frac{d}{dx}\left(\sin(x)\right) &= \cos(x) \\
\frac{d}{dx}\left(e^x\right) &= e^x \\
\frac{d}{dx}\left(\ln(x)\right) &= \frac{1}{x}
\end{align}

\end{document}"#;

const LETTER_CONTENT: &str = r#"\documentclass[12pt]{letter}
\usepackage[utf8]{inputenc}
\usepackage{geometry}
\geometry{margin=1in}

\signature{Your Name}
\address{Your Address \\ City, State ZIP \\ Email: your.email@example.com}

\begin{document}

\begin{letter}{Recipient Name \\ Recipient Address \\ City, State ZIP}

\opening{Dear [Recipient Name],}

This is the body of your letter. Write your message here with proper paragraphs and formatting.

Second paragraph continues your message with additional details or information you want to convey.

\closing{Sincerely,}

\end{letter}

\end{document}"#;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seed_set_is_five_builtins_with_unique_ids() {
        let templates = builtin_templates();
        assert_eq!(templates.len(), 5);
        assert!(templates.iter().all(|t| t.is_builtin));

        let ids: HashSet<_> = templates.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn category_split_is_two_two_one() {
        let templates = builtin_templates();
        let count = |c: &str| templates.iter().filter(|t| t.category == c).count();
        assert_eq!(count("academic"), 2);
        assert_eq!(count("business"), 2);
        assert_eq!(count("presentation"), 1);
    }

    #[test]
    fn every_template_is_a_complete_latex_document() {
        for template in builtin_templates() {
            assert!(
                template.content.starts_with(r"\documentclass"),
                "{} does not start with a documentclass",
                template.name
            );
            assert!(template.content.ends_with(r"\end{document}"));
        }
    }
}
