use crate::curriculum::lesson::LessonSource;

pub(crate) const LESSONS: &[LessonSource] = &[
    LessonSource {
        slug: "introduction",
        title: "What is HTML?",
        summary: "How a browser turns markup into a page.",
        body: r##"HTML (HyperText Markup Language) describes the *structure* of a web page.
The browser reads the markup, builds a tree of elements and paints it.

```html
<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <title>My first page</title>
  </head>
  <body>
    <h1>Hello, web!</h1>
    <p>This is a paragraph.</p>
  </body>
</html>
```

- `<head>` holds metadata the visitor does not see directly.
- `<body>` holds everything that is rendered.

**Exercise:** save the snippet as `index.html`, open it in a browser and
change the heading text.
"##,
    },
    LessonSource {
        slug: "elements",
        title: "Elements and Attributes",
        summary: "Tags, nesting and the attributes that configure them.",
        body: r##"An element is an opening tag, some content and a closing tag.
Attributes live inside the opening tag and configure the element.

```html
<p class="intro">Welcome to <strong>Web Dev Academy</strong>.</p>
<img src="logo.png" alt="Academy logo">
```

Some elements, such as `<img>` and `<br>`, are *void*: they have no content
and no closing tag.

Elements nest like boxes. Always close the inner box before the outer one:

```html
<ul>
  <li>First</li>
  <li>Second</li>
</ul>
```

**Exercise:** build a list of three favourite foods, making one of them bold.
"##,
    },
    LessonSource {
        slug: "links-and-images",
        title: "Links and Images",
        summary: "Connecting pages together and embedding pictures.",
        body: r##"Links use the anchor element and its `href` attribute.

```html
<a href="https://developer.mozilla.org">MDN Web Docs</a>
<a href="/css/selectors">Next: CSS selectors</a>
```

Images need a source and a text alternative for screen readers:

```html
<img src="cat.jpg" alt="A ginger cat asleep on a keyboard" width="320">
```

**Exercise:** make the image itself a link by wrapping the `<img>` inside an
`<a>`.
"##,
    },
    LessonSource {
        slug: "forms",
        title: "Forms",
        summary: "Collecting input with labels, inputs and buttons.",
        body: r##"Forms gather data from the visitor.

```html
<form action="/subscribe" method="post">
  <label for="email">Email</label>
  <input id="email" name="email" type="email" required>

  <label>
    <input type="checkbox" name="weekly"> Weekly digest
  </label>

  <button type="submit">Subscribe</button>
</form>
```

- Every input should have a `<label>`; clicking the label focuses the input.
- The `type` attribute gives you validation and a suitable keyboard on phones.

**Exercise:** add a `<select>` that lets the visitor pick a favourite track.
"##,
    },
    LessonSource {
        slug: "semantic-html",
        title: "Semantic HTML",
        summary: "Choosing elements for meaning, not looks.",
        body: r##"Semantic elements tell browsers, search engines and assistive technology
what a region of the page *is*.

```html
<header>Site title</header>
<nav>Main links</nav>
<main>
  <article>
    <h2>Lesson</h2>
    <section>...</section>
  </article>
</main>
<footer>Contact</footer>
```

Prefer `<button>` over a clickable `<div>`, and `<nav>` over a `<div
class="nav">`.

**Exercise:** take a page built only from `<div>`s and replace each with the
most fitting semantic element.
"##,
    },
];
