//! Stylesheet for the landing screen.
//!
//! Breakpoints: the hero stacks (text above image) and the value grid drops
//! to one column below 768px; the hero buttons stack below 640px.

/// Complete CSS for the landing screen.
///
/// Every region's default rules describe its settled look. Entrance
/// animations are layered on top via inline styles and keyframes, see
/// [`crate::animation`].
pub const LANDING_CSS: &str = r#"
:root {
    --blue-50: #eff6ff;
    --blue-600: #2563eb;
    --blue-700: #1d4ed8;
    --gray-100: #f3f4f6;
    --gray-300: #d1d5db;
    --gray-400: #9ca3af;
    --gray-500: #6b7280;
    --gray-600: #4b5563;
    --gray-700: #374151;
    --gray-800: #1f2937;
    --gray-900: #111827;
    --radius: 0.75rem;
}

* { box-sizing: border-box; }

body {
    margin: 0;
    font-family: ui-sans-serif, system-ui, -apple-system, "Segoe UI", Roboto, sans-serif;
}

.landing {
    min-height: 100vh;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: space-between;
    padding: 1.5rem;
    background: linear-gradient(to bottom, #ffffff, var(--blue-50), #ffffff);
}

/* Hero */
.hero {
    width: 100%;
    max-width: 72rem;
    display: flex;
    flex-direction: row;
    align-items: center;
    justify-content: space-between;
    gap: 2rem;
}

.hero-text {
    flex: 1;
    text-align: left;
}

.hero-title {
    font-size: 3rem;
    font-weight: 800;
    line-height: 1.25;
    color: var(--gray-900);
    margin: 0 0 1rem;
}

.hero-title-accent { color: var(--blue-600); }

.hero-description {
    font-size: 1.25rem;
    color: var(--gray-700);
    margin: 0 0 1.5rem;
}

.hero-actions {
    display: flex;
    flex-direction: row;
    gap: 1rem;
    justify-content: flex-start;
}

.hero-hint {
    margin-top: 2rem;
    font-size: 0.875rem;
    color: var(--gray-500);
}

.hero-media { flex: 1; }

.hero-image {
    display: block;
    width: 100%;
    height: auto;
    aspect-ratio: 600 / 400;
}

/* Buttons */
.btn {
    padding: 0.75rem 1.5rem;
    border-radius: var(--radius);
    font-size: 1rem;
    cursor: pointer;
    transition: background-color 150ms ease, box-shadow 150ms ease;
}

.btn-primary {
    background: var(--blue-600);
    color: #ffffff;
    border: 1px solid var(--blue-600);
    box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1);
}

.btn-primary:hover { background: var(--blue-700); }

.btn-secondary {
    background: #ffffff;
    color: var(--gray-800);
    border: 1px solid var(--gray-300);
}

.btn-secondary:hover { background: var(--gray-100); }

/* Value proposition */
.value-proposition {
    margin-top: 4rem;
    width: 100%;
    max-width: 72rem;
}

.value-inner { text-align: center; }

.value-title {
    font-size: 1.875rem;
    font-weight: 700;
    color: var(--gray-800);
    margin: 0 0 1rem;
}

.value-description {
    font-size: 1.125rem;
    color: var(--gray-600);
    margin: 0 0 2rem;
}

.value-grid {
    display: grid;
    grid-template-columns: repeat(3, minmax(0, 1fr));
    gap: 2rem;
}

.value-card {
    background: #ffffff;
    border-radius: var(--radius);
    padding: 1.5rem;
    box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1);
    transition: box-shadow 150ms ease;
}

.value-card:hover { box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1); }

.value-card-icon {
    font-size: 3rem;
    margin-bottom: 1rem;
}

.value-card-title {
    font-size: 1.25rem;
    font-weight: 600;
    color: var(--gray-700);
    margin: 0 0 0.5rem;
}

.value-card-body {
    color: var(--gray-600);
    margin: 0;
}

/* Footer */
.footer {
    margin-top: 3rem;
    font-size: 0.875rem;
    color: var(--gray-400);
    text-align: center;
}

/* Destination placeholders */
.placeholder {
    min-height: 100vh;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    gap: 1rem;
    color: var(--gray-800);
}

@media (max-width: 767px) {
    .hero {
        /* text leads when stacked */
        flex-direction: column;
    }
    .hero-text { text-align: center; }
    .hero-actions { justify-content: center; }
    .value-grid { grid-template-columns: minmax(0, 1fr); }
}

@media (max-width: 639px) {
    .landing { padding: 1.5rem; }
    .hero-title { font-size: 2.25rem; }
    .hero-description { font-size: 1.125rem; }
    .hero-actions { flex-direction: column; }
}

@media (min-width: 640px) {
    .landing { padding: 3rem; }
}
"#;
