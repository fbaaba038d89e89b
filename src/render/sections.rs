//! Section templates
//!
//! Each view borrows the records it renders and writes markup through
//! `Display`, so a whole page is one `to_string()` away and nothing is
//! buffered twice.

use std::fmt::{self, Display, Formatter};

use crate::core::models::{
    CertificationItem, ExperienceItem, Glyph, LanguageItem, NavLink, Profile, ProjectItem,
    SkillItem,
};
use crate::core::services::{
    LayoutMode, Section, SectionKind, TimelinePlacement, timeline_placement,
};

use super::html::{Escaped, GlyphSvg};

/// Fixed navigation bar with the mobile menu
pub struct Header<'a> {
    pub profile: &'a Profile,
    pub nav: &'a [NavLink],
}

impl Display for Header<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, r#"<header class="site-header" data-nav>"#)?;
        writeln!(f, r#"  <nav class="site-nav container">"#)?;
        writeln!(
            f,
            r##"    <a href="#" class="site-nav__brand">{}</a>"##,
            Escaped(&self.profile.brand)
        )?;
        writeln!(f, r#"    <div class="site-nav__links">"#)?;
        for link in self.nav {
            writeln!(
                f,
                r#"      <a href="{}" class="site-nav__link">{}</a>"#,
                Escaped(&link.href),
                Escaped(&link.name)
            )?;
        }
        writeln!(f, "    </div>")?;
        writeln!(
            f,
            r#"    <button type="button" class="site-nav__toggle" aria-label="Toggle menu" aria-expanded="false" data-menu-toggle>{}</button>"#,
            GlyphSvg::large(Glyph::Menu)
        )?;
        writeln!(f, "  </nav>")?;
        writeln!(f, r#"  <div class="site-menu" data-menu hidden>"#)?;
        for link in self.nav {
            writeln!(
                f,
                r#"    <a href="{}" class="site-menu__link" data-menu-link>{}</a>"#,
                Escaped(&link.href),
                Escaped(&link.name)
            )?;
        }
        writeln!(f, "  </div>")?;
        writeln!(f, "</header>")
    }
}

/// Full-height banner
pub struct Hero<'a> {
    pub section: &'a Section,
    pub profile: &'a Profile,
}

impl Display for Hero<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let p = self.profile;
        writeln!(f, r#"<div id="{}" class="hero">"#, self.section.id)?;
        writeln!(f, r#"  <div class="hero__inner container">"#)?;
        writeln!(f, r#"    <div class="hero__text fade-in-up">"#)?;
        writeln!(f, r#"      <h1 class="hero__name">{}</h1>"#, Escaped(&p.name))?;
        writeln!(f, r#"      <p class="hero__headline">{}</p>"#, Escaped(&p.headline))?;
        writeln!(f, r#"      <p class="hero__tagline">{}</p>"#, Escaped(&p.tagline))?;
        writeln!(
            f,
            r##"      <a href="#{}" class="button hero__cta">Let's Connect</a>"##,
            SectionKind::Contact.id()
        )?;
        writeln!(f, "    </div>")?;
        writeln!(f, r#"    <div class="hero__portrait fade-in-up fade-in-up--delayed">"#)?;
        writeln!(
            f,
            r#"      <img src="{}" alt="{}" class="hero__image">"#,
            Escaped(&p.portrait_url),
            Escaped(&p.name)
        )?;
        writeln!(f, "    </div>")?;
        writeln!(f, "  </div>")?;
        writeln!(f, "</div>")
    }
}

/// A titled, reveal-tracked section wrapping a body
pub struct Frame<'a, B> {
    pub section: &'a Section,
    pub body: B,
}

impl<B: Display> Display for Frame<'_, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let reveal = if self.section.kind.is_tracked() {
            " data-reveal"
        } else {
            ""
        };
        writeln!(
            f,
            r#"<section id="{}" class="section container"{reveal}>"#,
            self.section.id
        )?;
        writeln!(
            f,
            r#"  <h2 class="section__title">{}</h2>"#,
            Escaped(&self.section.title)
        )?;
        writeln!(f, r#"  <div class="section-content">"#)?;
        write!(f, "{}", self.body)?;
        writeln!(f, "  </div>")?;
        writeln!(f, "</section>")
    }
}

/// About-me paragraph and location
pub struct About<'a>(pub &'a Profile);

impl Display for About<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, r#"    <p class="about__text">{}</p>"#, Escaped(&self.0.about))?;
        writeln!(
            f,
            r#"    <div class="about__location">📍 {}</div>"#,
            Escaped(&self.0.location)
        )
    }
}

/// Alternating experience timeline
pub struct Timeline<'a>(pub &'a [ExperienceItem]);

impl Display for Timeline<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, r#"    <div class="timeline">"#)?;
        for (index, item) in self.0.iter().enumerate() {
            let side = match timeline_placement(index, LayoutMode::Wide) {
                TimelinePlacement::Right => "right",
                _ => "left",
            };
            writeln!(
                f,
                r#"      <div class="timeline__entry timeline__entry--{side}" data-index="{index}">"#
            )?;
            writeln!(f, r#"        <span class="timeline__dot"></span>"#)?;
            writeln!(f, r#"        <article class="card experience-card">"#)?;
            writeln!(f, r#"          <h3 class="card__title">{}</h3>"#, Escaped(&item.role))?;
            writeln!(
                f,
                r#"          <p class="experience-card__org">{}</p>"#,
                Escaped(&item.organization)
            )?;
            writeln!(
                f,
                r#"          <p class="experience-card__duration">{}</p>"#,
                Escaped(&item.duration)
            )?;
            writeln!(f, r#"          <ul class="experience-card__highlights">"#)?;
            for point in &item.highlights {
                writeln!(f, "            <li>{}</li>", Escaped(point))?;
            }
            writeln!(f, "          </ul>")?;
            writeln!(f, "        </article>")?;
            writeln!(f, "      </div>")?;
        }
        writeln!(f, "    </div>")
    }
}

/// Skill badges
pub struct Skills<'a>(pub &'a [SkillItem]);

impl Display for Skills<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, r#"    <div class="skills">"#)?;
        for skill in self.0 {
            writeln!(
                f,
                r#"      <div class="badge"><span class="badge__glyph">{}</span><span class="badge__name">{}</span></div>"#,
                GlyphSvg::badge(skill.glyph),
                Escaped(&skill.name)
            )?;
        }
        writeln!(f, "    </div>")
    }
}

/// Certification list
pub struct Certifications<'a>(pub &'a [CertificationItem]);

impl Display for Certifications<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, r#"    <div class="certifications">"#)?;
        for cert in self.0 {
            writeln!(f, r#"      <div class="card certification">"#)?;
            writeln!(
                f,
                r#"        <div class="certification__glyph">{}</div>"#,
                GlyphSvg::large(cert.glyph)
            )?;
            writeln!(f, "        <div>")?;
            writeln!(f, r#"          <h3 class="card__title">{}</h3>"#, Escaped(&cert.name))?;
            writeln!(
                f,
                r#"          <p class="certification__issuer">{}</p>"#,
                Escaped(&cert.issuer)
            )?;
            writeln!(f, "        </div>")?;
            writeln!(f, "      </div>")?;
        }
        writeln!(f, "    </div>")
    }
}

/// Project card grid
pub struct Projects<'a>(pub &'a [ProjectItem]);

impl Display for Projects<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, r#"    <div class="projects">"#)?;
        for project in self.0 {
            writeln!(f, r#"      <div class="card project-card">"#)?;
            writeln!(
                f,
                r#"        <img src="{}" alt="{}" class="project-card__image">"#,
                Escaped(&project.image_url),
                Escaped(&project.title)
            )?;
            writeln!(f, r#"        <div class="project-card__body">"#)?;
            writeln!(f, r#"          <h3 class="card__title">{}</h3>"#, Escaped(&project.title))?;
            writeln!(
                f,
                r#"          <p class="project-card__description">{}</p>"#,
                Escaped(&project.description)
            )?;
            writeln!(f, r#"          <div class="project-card__tags">"#)?;
            for tag in &project.tech {
                writeln!(f, r#"            <span class="tag">{}</span>"#, Escaped(tag))?;
            }
            writeln!(f, "          </div>")?;
            if let Some(link) = &project.link {
                writeln!(
                    f,
                    r#"          <a href="{}" class="project-card__link" target="_blank" rel="noopener noreferrer">View project</a>"#,
                    Escaped(link)
                )?;
            }
            writeln!(f, "        </div>")?;
            writeln!(f, "      </div>")?;
        }
        writeln!(f, "    </div>")
    }
}

/// Contact form and spoken languages
pub struct Contact<'a> {
    pub profile: &'a Profile,
    pub languages: &'a [LanguageItem],
    pub action: Option<&'a str>,
}

impl Display for Contact<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, r#"    <div class="contact">"#)?;
        writeln!(
            f,
            r#"      <p class="contact__blurb">{}</p>"#,
            Escaped(&self.profile.contact_blurb)
        )?;
        match self.action {
            Some(action) => writeln!(
                f,
                r#"      <form class="contact__form" method="post" action="{}" data-contact-form>"#,
                Escaped(action)
            )?,
            None => writeln!(f, r#"      <form class="contact__form" data-contact-form>"#)?,
        }
        writeln!(f, r#"        <div class="contact__row">"#)?;
        writeln!(
            f,
            r#"          <input type="text" name="name" placeholder="Your Name" class="field" required>"#
        )?;
        writeln!(
            f,
            r#"          <input type="email" name="email" placeholder="Your Email" value="{}" class="field" required>"#,
            Escaped(&self.profile.email)
        )?;
        writeln!(f, "        </div>")?;
        writeln!(
            f,
            r#"        <textarea name="message" placeholder="Your Message" rows="5" class="field" required></textarea>"#
        )?;
        writeln!(
            f,
            r#"        <button type="submit" class="button contact__submit">Send Message</button>"#
        )?;
        writeln!(f, r#"        <p class="contact__status" data-contact-status hidden></p>"#)?;
        writeln!(f, "      </form>")?;
        if !self.languages.is_empty() {
            writeln!(f, r#"      <div class="languages">"#)?;
            writeln!(f, r#"        <h4 class="languages__title">Languages</h4>"#)?;
            writeln!(f, r#"        <div class="languages__list">"#)?;
            for language in self.languages {
                writeln!(
                    f,
                    r#"          <div class="languages__item"><span>{} {}</span><span class="languages__level">{}</span></div>"#,
                    Escaped(&language.flag),
                    Escaped(&language.name),
                    Escaped(&language.proficiency)
                )?;
            }
            writeln!(f, "        </div>")?;
            writeln!(f, "      </div>")?;
        }
        writeln!(f, "    </div>")
    }
}

/// Footer with profile links and copyright
pub struct Footer<'a> {
    pub profile: &'a Profile,
    pub year: i32,
}

impl Display for Footer<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, r#"<footer class="site-footer">"#)?;
        writeln!(f, r#"  <div class="container">"#)?;
        writeln!(f, r#"    <div class="site-footer__links">"#)?;
        for link in &self.profile.social {
            writeln!(
                f,
                r#"      <a href="{}" target="_blank" rel="noopener noreferrer" aria-label="{}">{}</a>"#,
                Escaped(&link.url),
                link.network.label(),
                GlyphSvg::large(link.network.glyph())
            )?;
        }
        writeln!(f, "    </div>")?;
        writeln!(
            f,
            "    <p>&copy; {} {}. All rights reserved.</p>",
            self.year,
            Escaped(&self.profile.name)
        )?;
        writeln!(
            f,
            r#"    <p class="site-footer__note">Ready for deployment or further customization!</p>"#
        )?;
        writeln!(f, "  </div>")?;
        writeln!(f, "</footer>")
    }
}
