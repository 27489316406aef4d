/// Structure every rewritten note must follow
pub const NOTE_TEMPLATE: &str = "\
**Client Name:**

**Agenda:**
-

**Meeting Notes:**
-

**Participants:**
-

**Next Steps:**
- [ ]

**References:**
-";

/// Build the instruction sent to the model for `note`.
///
/// The template and the note are embedded verbatim, nothing is escaped or
/// validated.
pub fn build_prompt(note: &str) -> String {
    format!(
        "You are an assistant that reformats meeting notes.\n\
         Rewrite the note below so that it follows the template exactly. \
         Keep every fact from the note, place each one under the matching \
         section and leave a section empty when the note has nothing for it.\n\
         Respond with the rewritten note only, in the template's format, \
         without any introduction, explanation or code fences.\n\n\
         ### Template\n{}\n\n\
         ### Note\n{}\n",
        NOTE_TEMPLATE, note
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_prompt_is_deterministic() {
        assert_eq!(build_prompt("Met with Acme Corp"), build_prompt("Met with Acme Corp"));
    }

    #[test]
    fn test_prompt_contains_template_then_note() {
        let prompt = build_prompt("Met with Acme Corp");

        let template_at = prompt.find(NOTE_TEMPLATE).expect("template embedded");
        let note_at = prompt.find("Met with Acme Corp").expect("note embedded");
        assert!(template_at < note_at);
    }

    #[test]
    fn test_prompt_golden_output() {
        let expected = format!(
            "You are an assistant that reformats meeting notes.\n\
             Rewrite the note below so that it follows the template exactly. \
             Keep every fact from the note, place each one under the matching \
             section and leave a section empty when the note has nothing for it.\n\
             Respond with the rewritten note only, in the template's format, \
             without any introduction, explanation or code fences.\n\n\
             ### Template\n{}\n\n### Note\nMet with Acme Corp\n",
            NOTE_TEMPLATE
        );

        assert_eq!(build_prompt("Met with Acme Corp"), expected);
    }

    #[test]
    fn test_empty_note_accepted() {
        let prompt = build_prompt("");
        assert!(prompt.contains(NOTE_TEMPLATE));
        assert!(prompt.ends_with("### Note\n\n"));
    }

    #[test]
    fn test_note_with_template_markers_kept_verbatim() {
        let note = "**Client Name:** Acme\n### Template\n{}";
        let prompt = build_prompt(note);
        assert!(prompt.contains(note));
    }

    #[test]
    fn test_template_lists_all_sections() {
        for section in [
            "Client Name",
            "Agenda",
            "Meeting Notes",
            "Participants",
            "Next Steps",
            "References",
        ] {
            assert!(NOTE_TEMPLATE.contains(&format!("**{}:**", section)), "{}", section);
        }
    }
}
