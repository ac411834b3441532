//! Fixed document fragments: the title page and the root document.

use crate::config::Layout;

/// Lines of the title page for `title`.
pub fn title(title: &str) -> Vec<String> {
    vec![
        "\\hspace{0pt}\\vfil".to_string(),
        format!("\\hfill\\resizebox{{.7\\linewidth}}{{!}}{{{title}}}"),
        "\\vfil\\hspace{0pt}".to_string(),
    ]
}

/// Preamble switches that do not come from the layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PreambleOptions {
    /// Draw the page geometry frames
    pub show_frames: bool,
    /// Draw boxes around hyperlinks
    pub show_links: bool,
}

/// The root `document.tex`: preamble, macros, and one `\input` per section
/// file stem in `inputs`.
pub fn document(layout: &Layout, options: PreambleOptions, inputs: &[&str]) -> String {
    let mut lines = vec![
        "\\documentclass[9pt]{extarticle}".to_string(),
        String::new(),
        "\\usepackage{geometry}".to_string(),
        format!(
            "\\geometry{{paperwidth={}, paperheight={}, top={}, bottom={}, left={}, right={}, marginparwidth={}, marginparsep={}}}",
            layout.paper.width,
            layout.paper.height,
            layout.margin.top,
            layout.margin.bottom,
            layout.margin.left,
            layout.margin.right,
            layout.margin_notes.width,
            layout.margin_notes.separator,
        ),
        "\\usepackage[table]{xcolor}".to_string(),
        "\\usepackage{tabularx}".to_string(),
        "\\usepackage{graphicx}".to_string(),
        "\\usepackage{marginnote}".to_string(),
        "\\usepackage{multido}".to_string(),
        "\\usepackage{amssymb}".to_string(),
    ];

    if options.show_frames {
        lines.push("\\usepackage{showframe}".to_string());
    }

    if options.show_links {
        lines.push("\\usepackage[pdfborder={0 0 1}]{hyperref}".to_string());
    } else {
        lines.push("\\usepackage[hidelinks]{hyperref}".to_string());
    }

    lines.extend([
        String::new(),
        "\\newcolumntype{Y}{>{\\centering\\arraybackslash}X}".to_string(),
        "\\newlength{\\myLengthThreeColumnWidth}".to_string(),
        format!(
            "\\setlength{{\\myLengthThreeColumnWidth}}{{{}}}",
            layout.lengths.three_column_width
        ),
        "\\newlength{\\myLengthThreeColumnsSeparatorWidth}".to_string(),
        format!(
            "\\setlength{{\\myLengthThreeColumnsSeparatorWidth}}{{{}}}",
            layout.lengths.three_columns_separator_width
        ),
        "\\newcommand{\\myLineThick}{\\par\\noindent\\rule{\\linewidth}{1pt}\\par}".to_string(),
        "\\newcommand{\\myLineGray}{{\\color{gray}\\hrule}}".to_string(),
        "\\newcommand{\\myLineLightGray}{{\\color{lightgray}\\hrule}}".to_string(),
        "\\newcommand{\\myUnderline}[1]{#1\\vskip1mm\\myLineThick}".to_string(),
        "\\newcommand{\\myDotGrid}[2]{\\leavevmode\\multido{\\dC=0mm+5mm}{#1}{\\multido{\\dR=0mm+5mm}{#2}{\\put(\\dR,\\dC){\\circle*{0.1}}}}}".to_string(),
        String::new(),
        "\\setlength{\\parindent}{0pt}".to_string(),
        "\\pagestyle{empty}".to_string(),
        String::new(),
        "\\begin{document}".to_string(),
    ]);
    lines.extend(inputs.iter().map(|input| format!("\\input{{{input}}}")));
    lines.push("\\end{document}".to_string());

    let mut text = lines.join("\n");
    text.push('\n');
    text
}
