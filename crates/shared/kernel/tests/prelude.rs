use gymhub_kernel::prelude::*;

#[derive(Debug, Clone, PartialEq)]
struct Member {
    folio: &'static str,
    name: &'static str,
    active: bool,
}

struct ActiveByName<'a>(&'a str);

impl Filter<Member> for ActiveByName<'_> {
    fn matches(&self, item: &Member) -> bool {
        item.active && text_matches(self.0, item.name)
    }
}

impl Validate for Member {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require_text("nombre", self.name);
        errors.into_result()
    }
}

fn members() -> Vec<Member> {
    vec![
        Member { folio: "CLI001", name: "Ana Ruiz", active: true },
        Member { folio: "CLI004", name: "Luis Ana", active: false },
        Member { folio: "CLI002", name: "Mariana", active: true },
    ]
}

#[test]
fn filter_then_next_folio() {
    let all = members();
    let hits = apply_filter(&all, &ActiveByName("ana"));
    assert_eq!(hits.iter().map(|m| m.folio).collect::<Vec<_>>(), ["CLI001", "CLI002"]);

    assert_eq!(next_folio("CLI", all.iter().map(|m| m.folio)), "CLI005");
}

#[test]
fn validation_and_confirmation_compose() {
    let blank = Member { folio: "CLI009", name: " ", active: true };
    let err = blank.validate().unwrap_err();
    assert!(err.has_field("nombre"));

    let confirmers: [&dyn Confirm; 2] = [&AlwaysConfirm, &NeverConfirm];
    let answers: Vec<bool> = confirmers.iter().map(|c| c.confirm("Delete?")).collect();
    assert_eq!(answers, [true, false]);
}
