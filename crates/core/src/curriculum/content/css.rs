use crate::curriculum::lesson::LessonSource;

pub(crate) const LESSONS: &[LessonSource] = &[
    LessonSource {
        slug: "selectors",
        title: "Selectors",
        summary: "Targeting the elements you want to style.",
        body: r##"A rule is a selector followed by declarations.

```css
p { color: #333; }            /* every paragraph */
.warning { color: crimson; }  /* elements with class="warning" */
#signup { padding: 1rem; }    /* the element with id="signup" */
nav a:hover { text-decoration: underline; }
```

When several rules match, the more *specific* selector wins; ids beat classes,
classes beat element names.

**Exercise:** style only the links inside the footer without touching the
other links on the page.
"##,
    },
    LessonSource {
        slug: "box-model",
        title: "The Box Model",
        summary: "Content, padding, border and margin.",
        body: r##"Every element is a box made of four layers:

1. content
2. padding
3. border
4. margin

```css
.card {
  width: 240px;
  padding: 16px;
  border: 2px solid #ddd;
  margin: 12px;
  box-sizing: border-box; /* width now includes padding and border */
}
```

**Exercise:** open the browser developer tools and inspect the box of any
element on this page.
"##,
    },
    LessonSource {
        slug: "flexbox",
        title: "Flexbox",
        summary: "One-dimensional layout along a row or a column.",
        body: r##"Flexbox lays children out along a main axis.

```css
.toolbar {
  display: flex;
  justify-content: space-between; /* main axis */
  align-items: center;            /* cross axis */
  gap: 8px;
}
.toolbar .grow { flex: 1; }
```

Switch to a column with `flex-direction: column`.

**Exercise:** centre a box both horizontally and vertically inside its parent
using three flexbox declarations.
"##,
    },
    LessonSource {
        slug: "grid",
        title: "CSS Grid",
        summary: "Two-dimensional layout with rows and columns.",
        body: r##"Grid places items into rows and columns at the same time.

```css
.gallery {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 16px;
}
.gallery .featured { grid-column: span 2; }
```

**Exercise:** build a page layout with a header, a sidebar, a main area and a
footer using `grid-template-areas`.
"##,
    },
    LessonSource {
        slug: "responsive-design",
        title: "Responsive Design",
        summary: "Media queries and fluid units.",
        body: r##"Responsive pages adapt to the size of the screen.

```css
.layout { display: grid; grid-template-columns: 1fr; }

@media (min-width: 768px) {
  .layout { grid-template-columns: 240px 1fr; }
}
```

Use relative units (`rem`, `%`, `vw`) and remember the viewport tag:

```html
<meta name="viewport" content="width=device-width, initial-scale=1">
```

**Exercise:** make a two-column layout collapse into a single column on
phones.
"##,
    },
];
