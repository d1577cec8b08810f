//! Site stylesheet. Class names carry a `_<theme>` suffix per theme.

/// Base layout plus the three theme variants.
pub const SITE_STYLES: &str = r#"
* { box-sizing: border-box; margin: 0; padding: 0; }
.app { min-height: 100vh; display: flex; flex-direction: column; transition: opacity 150ms ease, background-color 150ms ease; }
.theme-transitioning { opacity: 0.6; }
.main { flex: 1; padding: 2rem; }
.nav-container { display: flex; align-items: center; justify-content: space-between; padding: 1rem 2rem; }
.nav-menu { display: flex; gap: 1rem; list-style: none; align-items: center; }
.nav-link, .brand-link { text-decoration: none; }
.page { max-width: 1100px; margin: 0 auto; }
.features-grid, .about-grid, .team-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(280px, 1fr)); gap: 1.5rem; }
.contact-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 2rem; }
.feature-card img { width: 100%; height: 200px; object-fit: contain; }
.form { display: flex; flex-direction: column; gap: 1rem; }
.form-input, .form-textarea, .select { width: 100%; padding: 0.6rem; font: inherit; }
.form-error { color: #d93025; font-size: 0.85rem; margin-top: 0.25rem; }
.social-links { display: flex; gap: 1rem; }
.footer { padding: 1.5rem; text-align: center; }

/* Theme 1 - Clean & Minimal */
.theme-1 { background: #ffffff; color: #222; font-family: "Helvetica Neue", Arial, sans-serif; }
.navigation_1 { border-bottom: 1px solid #e5e5e5; }
.nav-link_1, .brand-link_1 { color: #222; }
.nav-link-active_1 { font-weight: 600; border-bottom: 2px solid #222; }
.feature-card_1, .about-card_1, .team-member_1 { border: 1px solid #e5e5e5; border-radius: 4px; padding: 1.25rem; }
.form-button_1 { background: #222; color: #fff; border: none; padding: 0.75rem; cursor: pointer; }
.footer_1 { border-top: 1px solid #e5e5e5; color: #666; }

/* Theme 2 - Dark Sidebar */
.theme-2 { background: #121212; color: #e0e0e0; font-family: Georgia, "Times New Roman", serif; flex-direction: row; }
.navigation_2 { background: #1e1e1e; width: 240px; min-height: 100vh; }
.theme-2 .nav-container { flex-direction: column; align-items: flex-start; gap: 2rem; }
.nav-menu_2 { flex-direction: column; align-items: flex-start; }
.nav-link_2, .brand-link_2 { color: #bbb; }
.nav-link-active_2 { color: #fff; }
.feature-card_2, .about-card_2, .team-member_2 { background: #1e1e1e; border-radius: 6px; padding: 1.25rem; }
.form-input_2, .form-textarea_2, .select_2 { background: #2a2a2a; color: #e0e0e0; border: 1px solid #444; }
.form-button_2 { background: #bb86fc; color: #121212; border: none; padding: 0.75rem; cursor: pointer; }
.footer_2 { color: #888; }

/* Theme 3 - Playful & Colorful */
.theme-3 { background: linear-gradient(135deg, #fff0f6, #e6fcf5); color: #343a40; font-family: "Pacifico", "Comic Sans MS", cursive; }
.navigation_3 { background: #ff6b9d; }
.nav-link_3, .brand-link_3 { color: #fff; }
.nav-link-active_3 { background: #fff; color: #ff6b9d; border-radius: 999px; padding: 0.25rem 0.75rem; }
.feature-card_3, .about-card_3, .team-member_3 { background: #fff; border-radius: 18px; padding: 1.25rem; box-shadow: 0 6px 18px rgba(255, 107, 157, 0.25); }
.feature-card_3:hover { transform: translateY(-4px) rotate(-1deg); }
.form-button_3 { background: #20c997; color: #fff; border: none; border-radius: 999px; padding: 0.75rem; cursor: pointer; }
.footer_3 { background: #ffd43b; }
"#;
