// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Mail-client fallback and contact card composition.

use crate::contact::ContactForm;

/// Builds a `mailto:` URI addressed to the site owner with the form contents
/// as subject and body.
///
/// An empty subject is replaced by a generic one naming the owner.
pub(crate) fn build_mailto(owner_email: &str, owner_name: &str, form: &ContactForm) -> String {
    let subject = match form.subject.trim() {
        "" => format!("Website contact - {owner_name}"),
        s => s.to_string(),
    };
    let body = format!("Name: {}\nEmail: {}\n\n{}", form.name, form.email, form.message);

    format!(
        "mailto:{}?subject={}&body={}",
        owner_email,
        urlencoding::encode(&subject),
        urlencoding::encode(&body)
    )
}

/// A minimal vCard 3.0 for the site owner.
pub(crate) fn build_vcard(owner_name: &str, owner_email: &str) -> String {
    [
        "BEGIN:VCARD".to_string(),
        "VERSION:3.0".to_string(),
        format!("FN:{owner_name}"),
        format!("EMAIL;TYPE=INTERNET:{owner_email}"),
        "END:VCARD".to_string(),
    ]
    .join("\n")
}

pub(crate) fn vcard_file_name(owner_name: &str) -> String {
    let stem: Vec<&str> = owner_name.split_whitespace().collect();
    format!("{}.vcf", stem.join("_"))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn mailto_encodes_subject_and_body() {
        let form = ContactForm {
            name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            subject: "Hi & bye".into(),
            message: "Line one\nLine two".into(),
            website: String::new(),
        };

        let uri = build_mailto("owner@example.com", "Owner", &form);
        assert_eq!(
            uri,
            "mailto:owner@example.com?subject=Hi%20%26%20bye\
             &body=Name%3A%20Ada%20Lovelace%0AEmail%3A%20ada%40example.com%0A%0ALine%20one%0ALine%20two"
        );
    }

    #[test]
    fn empty_subject_names_the_owner() {
        let uri = build_mailto("owner@example.com", "Greyber Sojo", &ContactForm::default());
        assert!(uri.contains("subject=Website%20contact%20-%20Greyber%20Sojo&"));
    }

    #[test]
    fn vcard_lines() {
        let card = build_vcard("Greyber Sojo", "owner@example.com");
        assert_eq!(
            card.lines().collect::<Vec<_>>(),
            vec![
                "BEGIN:VCARD",
                "VERSION:3.0",
                "FN:Greyber Sojo",
                "EMAIL;TYPE=INTERNET:owner@example.com",
                "END:VCARD",
            ]
        );
        assert_eq!(vcard_file_name("Greyber  Sojo"), "Greyber_Sojo.vcf");
    }
}
