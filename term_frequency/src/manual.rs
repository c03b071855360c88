/*!

This is the long-form manual for `term_frequency` and `wcterms`.

## How terms are counted

Each response is lowercased and its accents are removed (`Ações` and `acoes`
are the same word). The text is then cut on every character that is not a
letter or a digit.

* A **unigram** is a single word that is not a stopword.
* A **bigram** is two words that follow each other in the same response.
Bigrams are kept even when one of their words is a stopword: `plano de acao`
produces the bigrams `plano de` and `de acao`.

Once everything is counted, each bigram gives back its occurrences: if
`novos aprendizados` was written 2 times, the count of `novos` and the count of
`aprendizados` each lose 2. Words that end with a count of zero or less are
removed. With the answers `novos aprendizados`, `novos aprendizados`, `novos`,
the cloud shows `novos aprendizados` (2) and `novos` (1), and no
`aprendizados`.

When only stopwords were written, the result is empty and the question is
reported as `notEnoughWords`.

## Running

```bash
wcterms -i respostas.csv \
  --questions "De quais projetos/resultados da minha equipe tenho orgulho?" \
  --questions "Do quê eu me orgulho em mim como profissional em 2025?"
```

With `--watch`, the input is read again every `refreshSeconds` and the summary
is rewritten, until the program is stopped. A missing or unreadable input is
then reported in the summary instead of stopping the program.

## Input formats

The following formats are supported:
* `csv` Comma Separated Values with a header row
* `xlsx` Excel workbooks, as exported by Google Forms or Microsoft Forms

In both cases the first row contains the question texts. Every other row is
one participant. Empty cells are ignored.

### `xlsx`

When the workbook has more than one worksheet, the name of the worksheet must
be given, either with `--excel-worksheet-name` or with the
`excelWorksheetName` key of the source.

## Configuration

All the options can be given in a JSON file, passed with `--config`:

```json
{
  "outputSettings": {
    "dashboardTitle": "Orgulho de fazer parte",
    "outputPath": "summary.json",
    "maxTerms": 50,
    "minimumTextLength": 5
  },
  "responseSources": [
    { "provider": "csv", "filePath": "respostas.csv" }
  ],
  "questions": [
    { "column": "De quais projetos/resultados da minha equipe tenho orgulho?",
      "title": "Projetos do time" }
  ],
  "stopwords": { "extra": ["sede"] },
  "refreshSeconds": 10
}
```

* `maxTerms` (default 50) the number of terms listed for each question.
* `minimumTextLength` (default 5) questions whose answers, put together, are
not longer than this are reported as `awaitingResponses`.
* `stopwords.extra` words added to the default stopwords.
* `stopwords.replaceDefaults` if `true`, only the `extra` words are used.
* `refreshSeconds` (default 10) the polling period of `--watch`.

File paths are relative to the directory of the configuration file.

## Output

```json
{
  "config": { "title": "Orgulho de fazer parte", "sources": 1 },
  "status": "ready",
  "questions": [
    {
      "title": "Projetos do time",
      "column": "De quais projetos/resultados da minha equipe tenho orgulho?",
      "status": "ready",
      "responses": 3,
      "terms": [ { "term": "novos aprendizados", "count": 2 } ]
    }
  ]
}
```

The status of a question is one of `ready`, `awaitingResponses`,
`notEnoughWords` or `columnPending`. The global status is `sourcePending` when
the source could not be read during `--watch`, or when it has no answer yet.

Terms are listed by decreasing count. Terms with the same count are listed
alphabetically.

*/
