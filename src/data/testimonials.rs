use pmde_core::Testimonial;

fn quote(text: &str, name: &str, job: &str, company: &str, corp: &str) -> Testimonial {
    Testimonial {
        text: text.to_string(),
        name: name.to_string(),
        job: job.to_string(),
        company: company.to_string(),
        corp: corp.to_string(),
    }
}

pub fn testimonials() -> Vec<Testimonial> {
    vec![
        quote(
            "Over the years, PMDE have provided valuable technical and investment advice on precious and base metal assets in Africa. Their local insight greatly supported informed investment decisions in the region.",
            "Phil Wilson",
            "Retired VP Technical",
            "FRANCO NEVADA CORPORATION",
            "",
        ),
        quote(
            "Worked closely with lenders and stakeholders to deliver bankable studies, in line with recognised industry policies and guidelines.",
            "Beverly Mona",
            "Technical Lead",
            "MINING INVESTMENTS,",
            "INDUSTRIAL DEVELOPMENT CORPORATION",
        ),
        quote(
            "PMDE has been a trusted technical partner to Sedibelo Resources for over a decade, delivering strategic plans, cost-effective designs and reserve sign-offs for both open-pit and underground operations.",
            "Aart Broekhuizen",
            "Executive",
            "Sedibelo Resources Limited",
            "",
        ),
        quote(
            "Highly recommend PMDE for their deep expertise and reliable project evaluations. Their insights and innovative thinking consistently drive efficiency and sustainable practices.",
            "Rob Ingram",
            "Independent advisor",
            "JSE",
            "",
        ),
        quote(
            "I've worked with PMDE several times and always found them professional and reliable. They define clear strategies and deliver detailed, high-quality outputs while aligning with client expectations.",
            "Richard Thomas",
            "COO",
            "Aris Mining",
            "Canada, South America",
        ),
        quote(
            "I’ve relied on PMDE across roles and companies for 20 years. Their experienced team, trusted leadership and consistent delivery make them my go-to partner for technical services.",
            "Richard Tayelor",
            "Chief Investment Officer",
            "Horizon Corporation",
            "London",
        ),
        quote(
            "PMDE plays a key role in engineering education, offering our students practical experience and strong mentorship. Their ongoing support helps bridge the gap between theory and industry.",
            "Prof Schalk Kok",
            "Chair",
            "School of Engineering",
            "University of Pretoria",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seven_named_testimonials() {
        let all = testimonials();
        assert_eq!(all.len(), 7);
        assert_eq!(all[0].name, "Phil Wilson");
        assert_eq!(all[6].name, "Prof Schalk Kok");
        assert!(all.iter().all(|t| !t.text.starts_with('"')));
    }
}
