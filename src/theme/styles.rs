//! Global CSS styles for Vitrine.
//!
//! Quiet gallery aesthetic: warm dark ground, brass accent, generous
//! whitespace. All behavioural classes the Rust side toggles ("scrolled",
//! "active", "animate-in", the toast states) live here; the components
//! only flip class names.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* GROUND (Backgrounds) */
  --ground: #101014;
  --ground-raised: #17171c;
  --ground-border: #26262e;

  /* BRASS (Accent, Titles, Actions) */
  --brass: #e0b458;
  --brass-soft: rgba(224, 180, 88, 0.35);

  /* TEXT */
  --text-primary: #f2f0eb;
  --text-secondary: rgba(242, 240, 235, 0.72);
  --text-muted: rgba(242, 240, 235, 0.45);

  /* SEMANTIC */
  --success: #4caf7d;
  --danger: #ff4d6a;
  --info: #58a6ff;

  /* Typography */
  --font-serif: 'Cormorant Garamond', Georgia, serif;
  --font-sans: 'Inter', 'Helvetica Neue', Arial, sans-serif;

  /* Type Scale */
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.25rem;
  --text-xl: 1.75rem;
  --text-2xl: 2.5rem;
  --text-3xl: 3.5rem;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-reveal: 600ms cubic-bezier(0.22, 0.61, 0.36, 1);

  --header-height: 72px;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  scroll-behavior: smooth;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-sans);
  background: var(--ground);
  color: var(--text-primary);
  line-height: 1.7;
  min-height: 100vh;
}

.page {
  outline: none;
}

/* === Header === */
.site-header {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 100;
  height: var(--header-height);
  background: transparent;
  transition: background var(--transition-normal), box-shadow var(--transition-normal);
}

.site-header.scrolled {
  background: rgba(16, 16, 20, 0.92);
  box-shadow: 0 1px 0 var(--ground-border), 0 8px 24px rgba(0, 0, 0, 0.35);
  backdrop-filter: blur(8px);
}

.nav-inner {
  max-width: 1080px;
  height: 100%;
  margin: 0 auto;
  padding: 0 1.5rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.brand {
  font-family: var(--font-serif);
  font-size: var(--text-xl);
  color: var(--brass);
  letter-spacing: 0.08em;
  cursor: pointer;
  user-select: none;
}

/* === Navigation Links === */
.nav-menu {
  display: flex;
  gap: 2rem;
}

.nav-link {
  font-size: var(--text-sm);
  letter-spacing: 0.12em;
  text-transform: uppercase;
  color: var(--text-secondary);
  cursor: pointer;
  padding: 0.25rem 0;
  border-bottom: 1px solid transparent;
  transition: color var(--transition-fast), border-color var(--transition-fast);
}

.nav-link:hover {
  color: var(--text-primary);
}

.nav-link.active {
  color: var(--brass);
  border-bottom-color: var(--brass);
}

/* === Mobile Toggle === */
.nav-toggle {
  display: none;
  flex-direction: column;
  gap: 5px;
  background: none;
  border: none;
  padding: 0.5rem;
  cursor: pointer;
}

.toggle-bar {
  width: 22px;
  height: 2px;
  background: var(--text-primary);
  transition: transform var(--transition-normal), opacity var(--transition-normal);
}

.nav-toggle.active .toggle-bar:nth-child(1) {
  transform: translateY(7px) rotate(45deg);
}

.nav-toggle.active .toggle-bar:nth-child(2) {
  opacity: 0;
}

.nav-toggle.active .toggle-bar:nth-child(3) {
  transform: translateY(-7px) rotate(-45deg);
}

/* === Hero === */
.hero {
  min-height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
  text-align: center;
  overflow: hidden;
  padding: 0 1.5rem;
}

.hero-inner {
  will-change: transform;
}

.hero-kicker {
  font-size: var(--text-sm);
  letter-spacing: 0.3em;
  text-transform: uppercase;
  color: var(--brass);
}

.hero-title {
  font-family: var(--font-serif);
  font-size: var(--text-3xl);
  font-weight: 400;
  margin: 1rem 0;
  max-width: 18ch;
}

.hero-tagline {
  color: var(--text-secondary);
  max-width: 46ch;
  margin: 0 auto 2.5rem;
}

.hero-actions {
  display: flex;
  gap: 1rem;
  justify-content: center;
}

/* === Buttons === */
.btn {
  font-family: var(--font-sans);
  font-size: var(--text-sm);
  letter-spacing: 0.1em;
  text-transform: uppercase;
  padding: 0.9rem 1.8rem;
  border-radius: 2px;
  border: 1px solid transparent;
  cursor: pointer;
  transition: background var(--transition-fast), color var(--transition-fast),
              border-color var(--transition-fast);
}

.btn-primary {
  background: var(--brass);
  color: var(--ground);
}

.btn-primary:hover {
  background: #ecc571;
}

.btn-primary:disabled {
  opacity: 0.6;
  cursor: default;
}

.btn-ghost {
  background: transparent;
  color: var(--text-primary);
  border-color: var(--ground-border);
}

.btn-ghost:hover {
  border-color: var(--brass);
  color: var(--brass);
}

/* === Sections === */
.section {
  max-width: 1080px;
  margin: 0 auto;
  padding: 6rem 1.5rem;
}

.section-title {
  font-family: var(--font-serif);
  font-size: var(--text-2xl);
  font-weight: 400;
  color: var(--brass);
  margin-bottom: 2.5rem;
}

/* === Work Cards === */
.card-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
  gap: 1.5rem;
}

.project-card {
  background: var(--ground-raised);
  border: 1px solid var(--ground-border);
  border-radius: 4px;
  padding: 2rem;
  opacity: 0;
  transform: translateY(30px);
  transition: opacity var(--transition-reveal), transform var(--transition-reveal),
              border-color var(--transition-fast);
}

.project-card:hover {
  border-color: var(--brass-soft);
}

.card-title {
  font-family: var(--font-serif);
  font-size: var(--text-xl);
  font-weight: 400;
  margin-bottom: 0.75rem;
}

.card-summary {
  color: var(--text-secondary);
  font-size: var(--text-sm);
  margin-bottom: 1.25rem;
}

.card-tags {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
}

.tag {
  font-size: 0.75rem;
  letter-spacing: 0.08em;
  text-transform: uppercase;
  color: var(--brass);
  border: 1px solid var(--brass-soft);
  border-radius: 2px;
  padding: 0.15rem 0.5rem;
}

/* === Studio === */
.studio-blurb {
  color: var(--text-secondary);
  max-width: 60ch;
  margin-bottom: 3rem;
}

.stats-row {
  display: flex;
  flex-wrap: wrap;
  gap: 3rem;
}

.stat {
  display: flex;
  flex-direction: column;
  opacity: 0;
  transform: translateY(30px);
  transition: opacity var(--transition-reveal), transform var(--transition-reveal);
}

.stat-value {
  font-family: var(--font-serif);
  font-size: var(--text-3xl);
  color: var(--brass);
  line-height: 1.1;
}

.stat-label {
  font-size: var(--text-sm);
  letter-spacing: 0.12em;
  text-transform: uppercase;
  color: var(--text-muted);
}

/* === Contact === */
.contact-columns {
  display: grid;
  grid-template-columns: 1fr 1.4fr;
  gap: 3rem;
}

.contact-methods {
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
}

.contact-method {
  display: flex;
  flex-direction: column;
  padding: 1.25rem 1.5rem;
  background: var(--ground-raised);
  border-left: 2px solid var(--brass);
  opacity: 0;
  transform: translateY(30px);
  transition: opacity var(--transition-reveal), transform var(--transition-reveal);
}

.method-label {
  font-size: 0.75rem;
  letter-spacing: 0.12em;
  text-transform: uppercase;
  color: var(--text-muted);
}

.method-value {
  color: var(--text-primary);
}

/* === Reveal Animation === */
/* Latched once by the scroll bridge; never removed. */
.animate-in {
  opacity: 1;
  transform: translateY(0);
}

/* === Contact Form === */
.contact-form {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.form-field {
  font-family: var(--font-sans);
  font-size: var(--text-base);
  color: var(--text-primary);
  background: var(--ground-raised);
  border: 1px solid var(--ground-border);
  border-radius: 2px;
  padding: 0.85rem 1rem;
  transition: border-color var(--transition-fast);
}

.form-field:focus {
  outline: none;
  border-color: var(--brass);
}

.form-field::placeholder {
  color: var(--text-muted);
}

.form-message {
  resize: vertical;
  min-height: 8rem;
}

.form-submit {
  align-self: flex-start;
}

/* === Toast === */
/* Off-canvas by default; .show slides it in. The 300ms transform
   transition is the exit window the scheduler waits out before removal. */
.toast {
  position: fixed;
  top: calc(var(--header-height) + 1rem);
  right: 1.5rem;
  z-index: 200;
  display: flex;
  align-items: center;
  gap: 1rem;
  max-width: 340px;
  padding: 1rem 1.25rem;
  background: var(--ground-raised);
  border: 1px solid var(--ground-border);
  border-left-width: 3px;
  border-radius: 4px;
  box-shadow: 0 12px 32px rgba(0, 0, 0, 0.4);
  transform: translateX(120%);
  transition: transform 300ms ease;
}

.toast.show {
  transform: translateX(0);
}

.toast-success {
  border-left-color: var(--success);
}

.toast-error {
  border-left-color: var(--danger);
}

.toast-info {
  border-left-color: var(--info);
}

.toast-message {
  font-size: var(--text-sm);
  color: var(--text-primary);
}

.toast-close {
  background: none;
  border: none;
  color: var(--text-muted);
  font-size: var(--text-lg);
  line-height: 1;
  cursor: pointer;
  transition: color var(--transition-fast);
}

.toast-close:hover {
  color: var(--text-primary);
}

/* === Footer === */
.site-footer {
  border-top: 1px solid var(--ground-border);
  padding: 2rem 1.5rem;
  text-align: center;
}

.footer-note {
  font-size: var(--text-sm);
  color: var(--text-muted);
}

/* === Mobile === */
@media (max-width: 768px) {
  .nav-toggle {
    display: flex;
  }

  .nav-menu {
    position: fixed;
    top: var(--header-height);
    left: 0;
    right: 0;
    flex-direction: column;
    gap: 0;
    background: rgba(16, 16, 20, 0.97);
    border-bottom: 1px solid var(--ground-border);
    transform: translateY(-130%);
    transition: transform var(--transition-normal);
  }

  .nav-menu.active {
    transform: translateY(0);
  }

  .nav-link {
    padding: 1.1rem 1.5rem;
    border-bottom: 1px solid var(--ground-border);
  }

  .hero-title {
    font-size: var(--text-2xl);
  }

  .hero-actions {
    flex-direction: column;
    align-items: center;
  }

  .contact-columns {
    grid-template-columns: 1fr;
  }

  .stats-row {
    gap: 2rem;
  }
}
"#;
