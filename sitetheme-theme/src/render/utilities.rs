/// Render `utilities.css`. Its content does not depend on the theme.
pub fn render_utilities_css() -> String {
    UTILITIES.to_string()
}

const UTILITIES: &str = "\
/* Theme Utilities CSS */
/* Additional utility classes and animations */

@keyframes fadeIn {
  from { opacity: 0; transform: translateY(20px); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes slideIn {
  from { transform: translateX(-100%); }
  to { transform: translateX(0); }
}

.fade-in {
  animation: fadeIn 0.6s ease-out;
}

.slide-in {
  animation: slideIn 0.5s ease-out;
}

/* Accessibility */
.btn:focus,
input:focus,
textarea:focus {
  outline: 2px solid var(--theme-accent);
  outline-offset: 2px;
}

/* Print Styles */
@media print {
  .no-print { display: none !important; }
  body { color: black !important; background: white !important; }
}
";
